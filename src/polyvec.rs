//! Vectors and matrices of `Polynomial`, sized at runtime from a `ParameterSet`'s `K`/`L`
//! (see `params.rs` for why this is `Vec`-backed rather than const-generic-sized).

use alloc::vec;
use alloc::vec::Vec;

use zeroize::Zeroize;

use crate::poly::{Polynomial, N};

/// A vector of `Polynomial`, e.g. a secret key component `s1 ∈ R_q^l` or public key component
/// `t ∈ R_q^k`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PolyVec(pub Vec<Polynomial>);

impl PolyVec {
    pub fn zero(len: usize) -> Self {
        PolyVec(vec![Polynomial::zero(); len])
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn ntt(&mut self) {
        for p in self.0.iter_mut() {
            p.ntt();
        }
    }

    pub fn inv_ntt(&mut self) {
        for p in self.0.iter_mut() {
            p.inv_ntt();
        }
    }

    pub fn add(&self, rhs: &PolyVec) -> PolyVec {
        debug_assert_eq!(self.len(), rhs.len());
        PolyVec(self.0.iter().zip(rhs.0.iter()).map(|(a, b)| *a + *b).collect())
    }

    pub fn sub(&self, rhs: &PolyVec) -> PolyVec {
        debug_assert_eq!(self.len(), rhs.len());
        PolyVec(self.0.iter().zip(rhs.0.iter()).map(|(a, b)| *a - *b).collect())
    }

    pub fn shl(&self, bits: u32) -> PolyVec {
        PolyVec(self.0.iter().map(|p| p.shl(bits)).collect())
    }

    pub fn power2round(&self) -> (PolyVec, PolyVec) {
        let mut t1 = Vec::with_capacity(self.len());
        let mut t0 = Vec::with_capacity(self.len());
        for p in &self.0 {
            let (hi, lo) = p.power2round();
            t1.push(hi);
            t0.push(lo);
        }
        (PolyVec(t1), PolyVec(t0))
    }

    pub fn high_bits(&self, alpha: u32) -> PolyVec {
        PolyVec(self.0.iter().map(|p| p.high_bits(alpha)).collect())
    }

    pub fn low_bits(&self, alpha: u32) -> PolyVec {
        PolyVec(self.0.iter().map(|p| p.low_bits(alpha)).collect())
    }

    /// `MakeHint` over every polynomial; returns the per-polynomial hint bitmasks and the total
    /// Hamming weight across the whole vector.
    pub fn make_hint(&self, r: &PolyVec, alpha: u32) -> (Vec<[bool; N]>, usize) {
        debug_assert_eq!(self.len(), r.len());
        let mut hints = Vec::with_capacity(self.len());
        let mut total = 0usize;
        for (z, rr) in self.0.iter().zip(r.0.iter()) {
            let (h, w) = z.make_hint(rr, alpha);
            hints.push(h);
            total += w;
        }
        (hints, total)
    }

    pub fn use_hint(&self, hints: &[[bool; N]], alpha: u32) -> PolyVec {
        debug_assert_eq!(self.len(), hints.len());
        PolyVec(
            self.0
                .iter()
                .zip(hints.iter())
                .map(|(p, h)| p.use_hint(h, alpha))
                .collect(),
        )
    }

    pub fn infinity_norm(&self) -> u32 {
        self.0.iter().map(|p| p.infinity_norm()).max().unwrap_or(0)
    }

    /// Multiplies every polynomial in the vector by a single scalar polynomial, pointwise; all
    /// operands must already be in the NTT domain.
    pub fn scalar_mul_ntt(&self, scalar: &Polynomial) -> PolyVec {
        PolyVec(self.0.iter().map(|p| p.pointwise_mul(scalar)).collect())
    }

    pub fn neg(&self) -> PolyVec {
        PolyVec(self.0.iter().map(|p| -*p).collect())
    }
}

impl Zeroize for PolyVec {
    fn zeroize(&mut self) {
        for p in self.0.iter_mut() {
            p.zeroize();
        }
    }
}

/// A `k x l` matrix of `Polynomial`, stored row-major.
#[derive(Clone, Debug)]
pub struct PolyMatrix {
    pub rows: usize,
    pub cols: usize,
    pub data: Vec<Polynomial>,
}

impl PolyMatrix {
    pub fn zero(rows: usize, cols: usize) -> Self {
        PolyMatrix {
            rows,
            cols,
            data: vec![Polynomial::zero(); rows * cols],
        }
    }

    pub fn get(&self, i: usize, j: usize) -> &Polynomial {
        &self.data[i * self.cols + j]
    }

    pub fn get_mut(&mut self, i: usize, j: usize) -> &mut Polynomial {
        &mut self.data[i * self.cols + j]
    }

    /// Matrix-vector product in the NTT domain: both `self` and `rhs` must already be NTT'd, and
    /// the result is returned still in the NTT domain (caller inverse-transforms as needed).
    pub fn mul_vec_ntt(&self, rhs: &PolyVec) -> PolyVec {
        debug_assert_eq!(self.cols, rhs.len());
        let mut out = Vec::with_capacity(self.rows);
        for i in 0..self.rows {
            let mut acc = Polynomial::zero();
            for j in 0..self.cols {
                acc += self.get(i, j).pointwise_mul(&rhs.0[j]);
            }
            out.push(acc);
        }
        PolyVec(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::Zq;

    #[test]
    fn vector_add_then_subtract_is_identity() {
        let mut a = PolyVec::zero(3);
        let mut b = PolyVec::zero(3);
        for i in 0..3 {
            a.0[i].0[0] = Zq::new(i as u32 + 1);
            b.0[i].0[0] = Zq::new((i as u32 + 1) * 7);
        }
        let sum = a.add(&b);
        assert_eq!(sum.sub(&b), a);
    }

    #[test]
    fn matrix_identity_like_multiply() {
        // A 1x1 "matrix" containing the multiplicative identity in NTT domain leaves the vector
        // unchanged after forward+inverse transform.
        let mut one = Polynomial::zero();
        one.0[0] = Zq::ONE;
        let mut matrix = PolyMatrix::zero(1, 1);
        *matrix.get_mut(0, 0) = {
            let mut p = one;
            p.ntt();
            p
        };

        let mut v = PolyVec::zero(1);
        v.0[0].0[0] = Zq::new(42);
        let original = v.clone();
        v.ntt();

        let mut result = matrix.mul_vec_ntt(&v);
        result.inv_ntt();

        assert_eq!(result, original);
    }
}
