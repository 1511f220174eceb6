//! Deterministic rejection sampling from SHAKE XOF output (FIPS 204 Algorithms 29, 32-34),
//! grounded on `internals/poly/sampling.hpp`.

use alloc::vec;
use alloc::vec::Vec;

use sha3::digest::{ExtendableOutput, Update, XofReader};
use sha3::{Shake128, Shake256};

use crate::field::{Zq, Q};
use crate::packing;
use crate::poly::Polynomial;
use crate::polyvec::PolyMatrix;

const SHAKE128_RATE: usize = 168;
const SHAKE256_RATE: usize = 136;

/// `ExpandA`: deterministically samples the public `k x l` matrix from a 32-byte seed `rho`,
/// uniformly over `Z_q`, using SHAKE-128.
pub fn expand_a(rho: &[u8; 32], k: usize, l: usize) -> PolyMatrix {
    let mut mat = PolyMatrix::zero(k, l);
    let mut buf = [0u8; SHAKE128_RATE];

    for i in 0..k {
        for j in 0..l {
            let mut hasher = Shake128::default();
            Update::update(&mut hasher, rho);
            Update::update(&mut hasher, &[j as u8, i as u8]);
            let mut reader = hasher.finalize_xof();

            let mut poly = Polynomial::zero();
            let mut n = 0usize;
            while n < 256 {
                reader.read(&mut buf);
                let mut boff = 0usize;
                while boff + 3 <= buf.len() && n < 256 {
                    let t0 = (buf[boff + 2] & 0x7f) as u32;
                    let t1 = buf[boff + 1] as u32;
                    let t2 = buf[boff] as u32;
                    let t3 = (t0 << 16) ^ (t1 << 8) ^ t2;
                    if t3 < Q {
                        poly.0[n] = Zq::new(t3);
                        n += 1;
                    }
                    boff += 3;
                }
            }
            *mat.get_mut(i, j) = poly;
        }
    }

    mat
}

fn expand_s_poly(rho_prime: &[u8; 64], nonce: u16, eta: u32) -> Polynomial {
    let mut hasher = Shake256::default();
    Update::update(&mut hasher, rho_prime);
    Update::update(&mut hasher, &nonce.to_le_bytes());
    let mut reader = hasher.finalize_xof();

    let mut poly = Polynomial::zero();
    let mut n = 0usize;
    let mut buf = [0u8; SHAKE256_RATE];
    let bound = if eta == 2 { 5u32 } else { 9u32 };

    while n < 256 {
        reader.read(&mut buf);
        for &byte in buf.iter() {
            if n >= 256 {
                break;
            }
            let t0 = (byte & 0x0f) as u32;
            let t1 = (byte >> 4) as u32;
            let limit = if eta == 2 { 15u32 } else { 9u32 };

            if t0 < limit {
                poly.0[n] = Zq::from_i32(eta as i32 - (t0 % bound) as i32);
                n += 1;
            }
            if n >= 256 {
                break;
            }
            if t1 < limit {
                poly.0[n] = Zq::from_i32(eta as i32 - (t1 % bound) as i32);
                n += 1;
            }
        }
    }

    poly
}

/// `ExpandS`: samples `count` polynomials with coefficients in `[-eta, eta]`, one nonce per
/// polynomial starting at `nonce_base`.
pub fn expand_s(rho_prime: &[u8; 64], nonce_base: u16, count: usize, eta: u32) -> Vec<Polynomial> {
    (0..count)
        .map(|i| expand_s_poly(rho_prime, nonce_base + i as u16, eta))
        .collect()
}

fn expand_mask_poly(seed: &[u8; 64], nonce: u16, gamma1: u32, gamma1_bw: u32) -> Polynomial {
    let mut hasher = Shake256::default();
    Update::update(&mut hasher, seed);
    Update::update(&mut hasher, &nonce.to_le_bytes());
    let mut reader = hasher.finalize_xof();

    let nbytes = (256 * gamma1_bw as usize) / 8;
    let mut buf = vec![0u8; nbytes];
    reader.read(&mut buf);

    let raw = packing::unpack_poly_unsigned(&buf, gamma1_bw);
    raw.sub_from_bound(gamma1)
}

/// `ExpandMask`: samples `l` polynomials with coefficients in `(-gamma1, gamma1]`, a single XOF
/// squeeze per polynomial (no rejection).
pub fn expand_mask(seed: &[u8; 64], nonce_base: u16, l: usize, gamma1: u32, gamma1_bw: u32) -> Vec<Polynomial> {
    (0..l)
        .map(|i| expand_mask_poly(seed, nonce_base + i as u16, gamma1, gamma1_bw))
        .collect()
}

/// `SampleInBall`: produces a degree-255 polynomial with exactly `tau` coefficients set to `+/-
/// 1` and the rest zero, deterministically from `seed` (the challenge hash `c~`, itself derived
/// from public data, so rejection here leaks nothing about secret material).
pub fn sample_in_ball(seed: &[u8], tau: u32) -> Polynomial {
    let mut hasher = Shake256::default();
    Update::update(&mut hasher, seed);
    let mut reader = hasher.finalize_xof();

    let mut sign_bytes = [0u8; 8];
    reader.read(&mut sign_bytes);

    let mut poly = Polynomial::zero();
    let from = 256 - tau as usize;

    for i in from..256 {
        loop {
            let mut b = [0u8; 1];
            reader.read(&mut b);
            let byte = b[0] as usize;
            if byte <= i {
                let j = byte;
                poly.0[i] = poly.0[j];
                let bit = (sign_bytes[(i - from) / 8] >> ((i - from) % 8)) & 1;
                poly.0[j] = if bit == 1 { -Zq::ONE } else { Zq::ONE };
                break;
            }
        }
    }

    poly
}
