//! Parameter-set binding.
//!
//! Rust's stable const-generic support cannot derive array lengths from a generic `usize`
//! parameter the way the original C++ reference's `template<size_t k, size_t l, ...>` headers
//! do, so the generic algorithm layers (`ntt`, `reduction`, `poly`, `polyvec`, `packing`,
//! `sampling`, `scheme`) are written once against this trait and operate on runtime-sized
//! `Vec<Polynomial>`; only the three marker types below are size-known at compile time, and only
//! at the outermost (`mldsa44`/`mldsa65`/`mldsa87`) wrapper layer.

/// Binds one of the three ML-DSA parameter tuples (FIPS 204 Table 1/2).
pub trait ParameterSet: Clone + Copy + Default + core::fmt::Debug + Eq + PartialEq {
    /// Rows of the public matrix A.
    const K: usize;
    /// Columns of the public matrix A.
    const L: usize;
    /// Secret-coefficient bound.
    const ETA: u32;
    /// Number of ±1 coefficients in the challenge polynomial.
    const TAU: u32;
    /// Bound on the mask vector `y`.
    const GAMMA1: u32;
    /// Low-order rounding range.
    const GAMMA2: u32;
    /// Maximum total Hamming weight of the hint vector.
    const OMEGA: usize;
    /// Collision-strength target in bits, used for challenge-seed length.
    const LAMBDA: usize;
    /// Rejection bound `TAU * ETA`.
    const BETA: u32;

    /// Bit width used to pack a single `eta`-bounded coefficient.
    const ETA_BW: u32;
    /// Bit width used to pack a single mask-vector coefficient.
    const GAMMA1_BW: u32;
    /// Bit width used to pack a single high-bits (`w1`) coefficient.
    const W1_BW: u32;

    /// Encoded public key length in bytes.
    const PK_LEN: usize;
    /// Encoded secret key length in bytes.
    const SK_LEN: usize;
    /// Encoded signature length in bytes.
    const SIG_LEN: usize;
}

/// `d`, the number of low-order bits dropped by `Power2Round`; identical across all three sets.
pub const D: u32 = 13;

/// Polynomial degree, fixed across all parameter sets.
const N: usize = 256;
/// Bit width of a `t1` (or public-key) coefficient: `23 - d`, fixed across all parameter sets.
const T1_BW: usize = 23 - D as usize;
/// Byte length of `tr = H(pk)`, fixed across all parameter sets.
const TR_LEN: usize = 64;

const fn pk_len(k: usize) -> usize {
    32 + k * N * T1_BW / 8
}

const fn sk_len(k: usize, l: usize, eta_bw: u32, _lambda: usize) -> usize {
    32 + 32 + TR_LEN + (l + k) * N * eta_bw as usize / 8 + k * N * D as usize / 8
}

const fn sig_len(l: usize, k: usize, lambda: usize, gamma1_bw: u32, omega: usize) -> usize {
    2 * lambda / 8 + l * N * gamma1_bw as usize / 8 + (omega + k)
}

/// ML-DSA-44 (Category 2, NIST security level 2).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MlDsa44;

impl ParameterSet for MlDsa44 {
    const K: usize = 4;
    const L: usize = 4;
    const ETA: u32 = 2;
    const TAU: u32 = 39;
    const GAMMA1: u32 = 1 << 17;
    const GAMMA2: u32 = (super::field::Q - 1) / 88;
    const OMEGA: usize = 80;
    const LAMBDA: usize = 128;
    const BETA: u32 = Self::TAU * Self::ETA;

    const ETA_BW: u32 = 3;
    const GAMMA1_BW: u32 = 18;
    const W1_BW: u32 = 6;

    const PK_LEN: usize = pk_len(Self::K);
    const SK_LEN: usize = sk_len(Self::K, Self::L, Self::ETA_BW, Self::LAMBDA);
    const SIG_LEN: usize = sig_len(Self::L, Self::K, Self::LAMBDA, Self::GAMMA1_BW, Self::OMEGA);
}

/// ML-DSA-65 (Category 3, NIST security level 3).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MlDsa65;

impl ParameterSet for MlDsa65 {
    const K: usize = 6;
    const L: usize = 5;
    const ETA: u32 = 4;
    const TAU: u32 = 49;
    const GAMMA1: u32 = 1 << 19;
    const GAMMA2: u32 = (super::field::Q - 1) / 32;
    const OMEGA: usize = 55;
    const LAMBDA: usize = 192;
    const BETA: u32 = Self::TAU * Self::ETA;

    const ETA_BW: u32 = 4;
    const GAMMA1_BW: u32 = 20;
    const W1_BW: u32 = 4;

    const PK_LEN: usize = pk_len(Self::K);
    const SK_LEN: usize = sk_len(Self::K, Self::L, Self::ETA_BW, Self::LAMBDA);
    const SIG_LEN: usize = sig_len(Self::L, Self::K, Self::LAMBDA, Self::GAMMA1_BW, Self::OMEGA);
}

/// ML-DSA-87 (Category 5, NIST security level 5).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MlDsa87;

impl ParameterSet for MlDsa87 {
    const K: usize = 8;
    const L: usize = 7;
    const ETA: u32 = 2;
    const TAU: u32 = 60;
    const GAMMA1: u32 = 1 << 19;
    const GAMMA2: u32 = (super::field::Q - 1) / 32;
    const OMEGA: usize = 75;
    const LAMBDA: usize = 256;
    const BETA: u32 = Self::TAU * Self::ETA;

    const ETA_BW: u32 = 3;
    const GAMMA1_BW: u32 = 20;
    const W1_BW: u32 = 4;

    const PK_LEN: usize = pk_len(Self::K);
    const SK_LEN: usize = sk_len(Self::K, Self::L, Self::ETA_BW, Self::LAMBDA);
    const SIG_LEN: usize = sig_len(Self::L, Self::K, Self::LAMBDA, Self::GAMMA1_BW, Self::OMEGA);
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Byte lengths from FIPS 204 Table 2.
    #[test]
    fn byte_lengths_match_the_standard() {
        assert_eq!(MlDsa44::PK_LEN, 1312);
        assert_eq!(MlDsa44::SK_LEN, 2560);
        assert_eq!(MlDsa44::SIG_LEN, 2420);

        assert_eq!(MlDsa65::PK_LEN, 1952);
        assert_eq!(MlDsa65::SK_LEN, 4032);
        assert_eq!(MlDsa65::SIG_LEN, 3309);

        assert_eq!(MlDsa87::PK_LEN, 2592);
        assert_eq!(MlDsa87::SK_LEN, 4896);
        assert_eq!(MlDsa87::SIG_LEN, 4627);
    }
}
