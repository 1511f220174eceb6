//! Decomposition and hint machinery (FIPS 204 Algorithms 13-15), grounded on
//! `internals/math/reduction.hpp` of the reference implementation.
//!
//! These operate on canonical `Zq` values but return plain integers: `r1` (the high-order part)
//! is always non-negative, `r0` (the low-order part) is a centered signed value used directly in
//! the signer's infinity-norm rejection checks.

use crate::field::{Zq, Q};
use crate::params::D;

/// `Power2Round`: splits `r` into `(r1, r0)` with `r = r1 * 2^d + r0` and `r0` centered in
/// `(-2^(d-1), 2^(d-1)]`.
pub fn power2round(r: Zq) -> (u32, i32) {
    let rp = r.raw() as i32;
    let m = 1i32 << D;
    let mut r0 = rp % m;
    if r0 > m / 2 {
        r0 -= m;
    }
    let r1 = ((rp - r0) >> D) as u32;
    (r1, r0)
}

/// `Decompose`: splits `r` into `(r1, r0)` with `r ≡ r1 * alpha + r0 (mod Q)`, handling the
/// boundary case where `r+ - r0 == Q - 1` (the wraparound alpha does not evenly divide into).
pub fn decompose(r: Zq, alpha: u32) -> (u32, i32) {
    let rp = r.raw() as i32;
    let alpha_i = alpha as i32;

    let mut r0 = rp % alpha_i;
    if r0 > alpha_i / 2 {
        r0 -= alpha_i;
    }

    if rp - r0 == Q as i32 - 1 {
        (0, r0 - 1)
    } else {
        (((rp - r0) / alpha_i) as u32, r0)
    }
}

/// High-order bits of `r` under modulus `alpha`.
pub fn high_bits(r: Zq, alpha: u32) -> u32 {
    decompose(r, alpha).0
}

/// Low-order (centered) bits of `r` under modulus `alpha`.
pub fn low_bits(r: Zq, alpha: u32) -> i32 {
    decompose(r, alpha).1
}

/// `MakeHint`: whether adding `z` to `r` changes its high-order bits.
pub fn make_hint(z: Zq, r: Zq, alpha: u32) -> bool {
    high_bits(r, alpha) != high_bits(r + z, alpha)
}

/// `UseHint`: reconstructs the high-order bits of `r + z` from `r` and a hint bit, without
/// needing `z` itself.
pub fn use_hint(h: bool, r: Zq, alpha: u32) -> u32 {
    let m = (Q - 1) / alpha;
    let (r1, r0) = decompose(r, alpha);
    if !h {
        return r1;
    }
    if r0 > 0 {
        (r1 + 1) % m
    } else {
        (r1 + m - 1) % m
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GAMMA2_44: u32 = (Q - 1) / 88;

    #[test]
    fn power2round_reconstructs_r() {
        for raw in [0u32, 1, 4096, 8191, 8192, 8193, Q - 1, Q / 2, 123456] {
            let r = Zq::new(raw % Q);
            let (r1, r0) = power2round(r);
            let reconstructed = Zq::from_i32((r1 as i32) * (1 << D) + r0);
            assert_eq!(reconstructed, r);
        }
    }

    #[test]
    fn decompose_reconstructs_r_mod_q() {
        for raw in [0u32, 1, 1000, GAMMA2_44, 2 * GAMMA2_44, Q - 2, Q - 1, Q / 2] {
            let r = Zq::new(raw % Q);
            let (r1, r0) = decompose(r, 2 * GAMMA2_44);
            let reconstructed = Zq::from_i32((r1 as i32) * (2 * GAMMA2_44 as i32) + r0);
            assert_eq!(reconstructed, r);
        }
    }

    #[test]
    fn use_hint_recovers_high_bits_of_shifted_value() {
        let alpha = 2 * GAMMA2_44;
        for raw in [0u32, 10, GAMMA2_44, GAMMA2_44 * 2 - 1, Q - 100, 7_000_000] {
            let r = Zq::new(raw % Q);
            for z_raw in [-1i32, 1, (GAMMA2_44 as i32) / 2, -(GAMMA2_44 as i32) / 2] {
                let z = Zq::from_i32(z_raw);
                let shifted = r + z;
                let hint = make_hint(z, r, alpha);
                assert_eq!(use_hint(hint, r, alpha), high_bits(shifted, alpha));
            }
        }
    }

    #[test]
    fn zero_offset_never_produces_a_hint() {
        let alpha = 2 * GAMMA2_44;
        for raw in [0u32, 55, Q - 1, Q / 2] {
            let r = Zq::new(raw % Q);
            assert!(!make_hint(Zq::ZERO, r, alpha));
        }
    }
}
