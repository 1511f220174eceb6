//! Bit packing for polynomial coefficients and hint vectors (FIPS 204 Algorithms 16-21),
//! grounded on `internals/poly/bit_packing.hpp`.
//!
//! Rather than transcribing the reference's seven width-specialized byte-shuffle routines
//! (`encode<3>`, `encode<4>`, ... `encode<20>`), coefficients are packed as a plain LSB-first
//! bitstream at an arbitrary width — the same wire format the specialized routines produce, just
//! generated generically. `SimpleBitPack`/`BitPack` in the standard are themselves defined as
//! this bitstream convention; the reference's per-width unrolling is a performance optimization,
//! not a different format.

use alloc::vec;
use alloc::vec::Vec;

use crate::field::Zq;
use crate::poly::{Polynomial, N};

/// Packs `width`-bit unsigned values, LSB first, into a byte buffer.
pub fn bitpack(coeffs: &[u32], width: u32) -> Vec<u8> {
    let total_bits = coeffs.len() * width as usize;
    let mut out = vec![0u8; (total_bits + 7) / 8];
    let mut bit = 0usize;
    for &c in coeffs {
        for b in 0..width {
            if (c >> b) & 1 == 1 {
                out[bit / 8] |= 1 << (bit % 8);
            }
            bit += 1;
        }
    }
    out
}

/// Inverse of [`bitpack`]; `bytes` must contain at least `ceil(count * width / 8)` bytes.
pub fn bitunpack(bytes: &[u8], width: u32, count: usize) -> Vec<u32> {
    let mut out = Vec::with_capacity(count);
    let mut bit = 0usize;
    for _ in 0..count {
        let mut v = 0u32;
        for b in 0..width {
            let byte = bytes[bit / 8];
            let bit_val = (byte >> (bit % 8)) & 1;
            v |= (bit_val as u32) << b;
            bit += 1;
        }
        out.push(v);
    }
    out
}

/// Packs a polynomial's raw (unsigned) coefficient values — used for `t1` and `w1`.
pub fn pack_poly_unsigned(p: &Polynomial, width: u32) -> Vec<u8> {
    let coeffs: Vec<u32> = p.coeffs().iter().map(|c| c.raw()).collect();
    bitpack(&coeffs, width)
}

pub fn unpack_poly_unsigned(bytes: &[u8], width: u32) -> Polynomial {
    let vals = bitunpack(bytes, width, N);
    let mut out = Polynomial::zero();
    for (i, v) in vals.into_iter().enumerate() {
        out.0[i] = Zq::new(v);
    }
    out
}

/// Packs a polynomial whose coefficients are centered in `(-bound, bound]` (or `[-bound,
/// bound]` for eta) by first mapping `c -> bound - c`, as `BitPack` does for `s1`/`s2`/`t0`/`z`.
pub fn pack_poly_centered(p: &Polynomial, bound: i32, width: u32) -> Vec<u8> {
    let coeffs: Vec<u32> = p
        .coeffs()
        .iter()
        .map(|c| (bound - c.centered()) as u32)
        .collect();
    bitpack(&coeffs, width)
}

pub fn unpack_poly_centered(bytes: &[u8], bound: i32, width: u32) -> Polynomial {
    let vals = bitunpack(bytes, width, N);
    let mut out = Polynomial::zero();
    for (i, v) in vals.into_iter().enumerate() {
        out.0[i] = Zq::from_i32(bound - v as i32);
    }
    out
}

/// Encodes the sparse hint vector across `k` polynomials into `omega + k` bytes: nonzero
/// coefficient indices for each polynomial, in ascending order, followed by a running total per
/// polynomial (FIPS 204 Algorithm 21, `HintBitPack`).
pub fn encode_hint(hint_polys: &[[bool; N]], omega: usize) -> Vec<u8> {
    let k = hint_polys.len();
    let mut out = vec![0u8; omega + k];
    let mut idx = 0usize;
    for (i, h) in hint_polys.iter().enumerate() {
        for (j, bit) in h.iter().enumerate() {
            if *bit {
                out[idx] = j as u8;
                idx += 1;
            }
        }
        out[omega + i] = idx as u8;
    }
    out
}

/// Decodes a hint vector, rejecting any malformed encoding: non-monotonic indices within a
/// polynomial's segment, an out-of-range running total, or a nonzero byte past the last total
/// (FIPS 204 Algorithm 22, `HintBitUnpack`).
pub fn decode_hint(bytes: &[u8], k: usize, omega: usize) -> Option<Vec<[bool; N]>> {
    if bytes.len() != omega + k {
        return None;
    }

    let mut result = vec![[false; N]; k];
    let mut idx = 0usize;
    for i in 0..k {
        let total = bytes[omega + i] as usize;
        if total < idx || total > omega {
            return None;
        }
        let mut prev: i32 = -1;
        for &byte in &bytes[idx..total] {
            let cur = byte as i32;
            if cur <= prev {
                return None;
            }
            prev = cur;
            result[i][cur as usize] = true;
        }
        idx = total;
    }

    if bytes[idx..omega].iter().any(|&b| b != 0) {
        return None;
    }

    Some(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bitpack_round_trips_at_every_standard_width() {
        for &width in &[3u32, 4, 6, 10, 13, 18, 20] {
            let max = (1u32 << width) - 1;
            let coeffs: Vec<u32> = (0..N as u32).map(|i| i % (max + 1)).collect();
            let packed = bitpack(&coeffs, width);
            let unpacked = bitunpack(&packed, width, N);
            assert_eq!(coeffs, unpacked);
        }
    }

    #[test]
    fn centered_packing_round_trips() {
        let bound = 2i32;
        let mut p = Polynomial::zero();
        for i in 0..N {
            p.0[i] = Zq::from_i32((i as i32 % 5) - 2);
        }
        let packed = pack_poly_centered(&p, bound, 3);
        let unpacked = unpack_poly_centered(&packed, bound, 3);
        assert_eq!(p, unpacked);
    }

    #[test]
    fn hint_round_trips() {
        let omega = 16;
        let mut polys = vec![[false; N]; 3];
        polys[0][0] = true;
        polys[0][5] = true;
        polys[1][255] = true;
        polys[2][1] = true;
        polys[2][2] = true;
        polys[2][3] = true;

        let encoded = encode_hint(&polys, omega);
        let decoded = decode_hint(&encoded, 3, omega).expect("valid encoding must decode");
        assert_eq!(decoded, polys);
    }

    #[test]
    fn hint_decode_rejects_non_monotonic_indices() {
        let omega = 8;
        let mut bytes = vec![0u8; omega + 2];
        bytes[0] = 5;
        bytes[1] = 3; // out of order within the same polynomial's span
        bytes[omega] = 2;
        bytes[omega + 1] = 2;
        assert!(decode_hint(&bytes, 2, omega).is_none());
    }

    #[test]
    fn hint_decode_rejects_nonzero_trailing_padding() {
        let omega = 8;
        let mut bytes = vec![0u8; omega + 1];
        bytes[omega] = 0;
        bytes[3] = 1; // nonzero padding past the last total
        assert!(decode_hint(&bytes, 1, omega).is_none());
    }
}
