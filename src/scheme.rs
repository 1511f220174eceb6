//! The generic ML-DSA keygen/sign/verify algorithm (FIPS 204 Algorithms 1-3 and their internal
//! forms, Algorithms 6-8), written once against [`ParameterSet`] and operating on byte slices.
//! Grounded on `internals/ml_dsa.hpp` of the reference implementation.
//!
//! Concrete, fixed-size-array-typed entry points live in `mldsa44`/`mldsa65`/`mldsa87`; this
//! module is the shared core they all delegate to.

use alloc::vec;
use alloc::vec::Vec;

use sha3::digest::{ExtendableOutput, Update, XofReader};
use sha3::Shake256;

use crate::packing;
use crate::params::{ParameterSet, D};
use crate::poly::{Polynomial, N};
use crate::polyvec::PolyVec;
use crate::sampling;
use crate::utils::secure_zero::secure_zeroize;

/// Safety cap on the Fiat-Shamir-with-aborts rejection loop. Expected iteration counts are
/// small (a handful, on average); this only guards against a seed that would otherwise loop
/// forever, and is never expected to trigger.
const MAX_SIGN_ITERATIONS: u32 = 1000;

fn shake256_xof(parts: &[&[u8]], out_len: usize) -> Vec<u8> {
    let mut hasher = Shake256::default();
    for part in parts {
        Update::update(&mut hasher, part);
    }
    let mut reader = hasher.finalize_xof();
    let mut out = vec![0u8; out_len];
    reader.read(&mut out);
    out
}

/// `byte(0) || byte(len(ctx)) || ctx || M`, FIPS 204's domain-separated message representative
/// for the non-prehashed signing mode. Returns `None` if `ctx` exceeds 255 bytes.
fn message_representative(msg: &[u8], ctx: &[u8]) -> Option<Vec<u8>> {
    if ctx.len() > 255 {
        return None;
    }
    let mut out = Vec::with_capacity(2 + ctx.len() + msg.len());
    out.push(0u8);
    out.push(ctx.len() as u8);
    out.extend_from_slice(ctx);
    out.extend_from_slice(msg);
    Some(out)
}

fn w1_encode(w1: &PolyVec, width: u32) -> Vec<u8> {
    let mut out = Vec::new();
    for p in &w1.0 {
        out.extend(packing::pack_poly_unsigned(p, width));
    }
    out
}

fn pk_encode<P: ParameterSet>(rho: &[u8], t1: &PolyVec) -> Vec<u8> {
    let mut out = Vec::with_capacity(P::PK_LEN);
    out.extend_from_slice(rho);
    for p in &t1.0 {
        out.extend(packing::pack_poly_unsigned(p, 23 - D));
    }
    out
}

fn pk_decode<P: ParameterSet>(bytes: &[u8]) -> (Vec<u8>, PolyVec) {
    let rho = bytes[0..32].to_vec();
    let poly_bytes = N * (23 - D) as usize / 8;
    let mut t1 = Vec::with_capacity(P::K);
    for i in 0..P::K {
        let off = 32 + i * poly_bytes;
        t1.push(packing::unpack_poly_unsigned(&bytes[off..off + poly_bytes], 23 - D));
    }
    (rho, PolyVec(t1))
}

fn sk_encode<P: ParameterSet>(
    rho: &[u8],
    k_seed: &[u8],
    tr: &[u8],
    s1: &PolyVec,
    s2: &PolyVec,
    t0: &PolyVec,
) -> Vec<u8> {
    let mut out = Vec::with_capacity(P::SK_LEN);
    out.extend_from_slice(rho);
    out.extend_from_slice(k_seed);
    out.extend_from_slice(tr);
    for p in &s1.0 {
        out.extend(packing::pack_poly_centered(p, P::ETA as i32, P::ETA_BW));
    }
    for p in &s2.0 {
        out.extend(packing::pack_poly_centered(p, P::ETA as i32, P::ETA_BW));
    }
    let t0_bound = 1i32 << (D - 1);
    for p in &t0.0 {
        out.extend(packing::pack_poly_centered(p, t0_bound, D));
    }
    out
}

struct SecretKeyParts {
    rho: Vec<u8>,
    k_seed: Vec<u8>,
    tr: Vec<u8>,
    s1: PolyVec,
    s2: PolyVec,
    t0: PolyVec,
}

fn sk_decode<P: ParameterSet>(bytes: &[u8]) -> SecretKeyParts {
    let rho = bytes[0..32].to_vec();
    let k_seed = bytes[32..64].to_vec();
    let tr = bytes[64..128].to_vec();

    let eta_poly_bytes = N * P::ETA_BW as usize / 8;
    let t0_poly_bytes = N * D as usize / 8;
    let t0_bound = 1i32 << (D - 1);

    let mut off = 128;
    let mut s1 = Vec::with_capacity(P::L);
    for _ in 0..P::L {
        s1.push(packing::unpack_poly_centered(
            &bytes[off..off + eta_poly_bytes],
            P::ETA as i32,
            P::ETA_BW,
        ));
        off += eta_poly_bytes;
    }
    let mut s2 = Vec::with_capacity(P::K);
    for _ in 0..P::K {
        s2.push(packing::unpack_poly_centered(
            &bytes[off..off + eta_poly_bytes],
            P::ETA as i32,
            P::ETA_BW,
        ));
        off += eta_poly_bytes;
    }
    let mut t0 = Vec::with_capacity(P::K);
    for _ in 0..P::K {
        t0.push(packing::unpack_poly_centered(&bytes[off..off + t0_poly_bytes], t0_bound, D));
        off += t0_poly_bytes;
    }

    SecretKeyParts {
        rho,
        k_seed,
        tr,
        s1: PolyVec(s1),
        s2: PolyVec(s2),
        t0: PolyVec(t0),
    }
}

fn sig_encode<P: ParameterSet>(c_tilde: &[u8], z: &PolyVec, hints: &[[bool; N]]) -> Vec<u8> {
    let mut out = Vec::with_capacity(P::SIG_LEN);
    out.extend_from_slice(c_tilde);
    for p in &z.0 {
        out.extend(packing::pack_poly_centered(p, P::GAMMA1 as i32, P::GAMMA1_BW));
    }
    out.extend(packing::encode_hint(hints, P::OMEGA));
    out
}

struct Signature {
    c_tilde: Vec<u8>,
    z: PolyVec,
    hints: Vec<[bool; N]>,
}

fn sig_decode<P: ParameterSet>(bytes: &[u8]) -> Option<Signature> {
    let c_tilde_len = 2 * P::LAMBDA / 8;
    if bytes.len() != P::SIG_LEN {
        return None;
    }
    let c_tilde = bytes[0..c_tilde_len].to_vec();

    let z_poly_bytes = N * P::GAMMA1_BW as usize / 8;
    let mut off = c_tilde_len;
    let mut z = Vec::with_capacity(P::L);
    for _ in 0..P::L {
        z.push(packing::unpack_poly_centered(
            &bytes[off..off + z_poly_bytes],
            P::GAMMA1 as i32,
            P::GAMMA1_BW,
        ));
        off += z_poly_bytes;
    }

    let hints = packing::decode_hint(&bytes[off..], P::K, P::OMEGA)?;

    Some(Signature {
        c_tilde,
        z: PolyVec(z),
        hints,
    })
}

/// Generic `KeyGen`: returns `(pk_bytes, sk_bytes)`.
pub fn keygen<P: ParameterSet>(seed: &[u8; 32]) -> (Vec<u8>, Vec<u8>) {
    let mut expanded = shake256_xof(&[seed, &[P::K as u8], &[P::L as u8]], 128);
    let rho: [u8; 32] = expanded[0..32].try_into().unwrap();
    let mut rho_prime: [u8; 64] = expanded[32..96].try_into().unwrap();
    let mut k_seed: [u8; 32] = expanded[96..128].try_into().unwrap();
    secure_zeroize(&mut expanded);

    let a_hat = sampling::expand_a(&rho, P::K, P::L);

    let s1_raw = sampling::expand_s(&rho_prime, 0, P::L, P::ETA);
    let s2_raw = sampling::expand_s(&rho_prime, P::L as u16, P::K, P::ETA);
    secure_zeroize(&mut rho_prime);

    let mut s1 = PolyVec(s1_raw);
    let mut s2 = PolyVec(s2_raw);

    let mut s1_hat = s1.clone();
    s1_hat.ntt();

    let mut t = a_hat.mul_vec_ntt(&s1_hat);
    t.inv_ntt();
    let t = t.add(&s2);

    let (t1, mut t0) = t.power2round();

    let pk = pk_encode::<P>(&rho, &t1);
    let tr = shake256_xof(&[&pk], 64);
    let sk = sk_encode::<P>(&rho, &k_seed, &tr, &s1, &s2, &t0);

    secure_zeroize(&mut k_seed);
    secure_zeroize(&mut s1);
    secure_zeroize(&mut s2);
    secure_zeroize(&mut t0);
    secure_zeroize(&mut s1_hat);

    (pk, sk)
}

/// Generic `Sign`: returns `None` when `ctx` exceeds 255 bytes or the iteration cap is hit
/// (the latter is not expected to happen for honestly generated keys).
pub fn sign<P: ParameterSet>(rnd: &[u8; 32], sk: &[u8], msg: &[u8], ctx: &[u8]) -> Option<Vec<u8>> {
    let msg_prime = message_representative(msg, ctx)?;
    let mut parts = sk_decode::<P>(sk);

    let mut s1_hat = parts.s1.clone();
    s1_hat.ntt();
    let mut s2_hat = parts.s2.clone();
    s2_hat.ntt();
    let mut t0_hat = parts.t0.clone();
    t0_hat.ntt();

    let mut mu = shake256_xof(&[&parts.tr, &msg_prime], 64);
    let mut rho_pp_vec = shake256_xof(&[&parts.k_seed, rnd, &mu], 64);
    let mut rho_pp: [u8; 64] = rho_pp_vec[..].try_into().unwrap();
    secure_zeroize(&mut rho_pp_vec);

    let rho_arr: [u8; 32] = parts.rho[..].try_into().unwrap();
    let a_hat = sampling::expand_a(&rho_arr, P::K, P::L);

    // s1/s2/t0 only ever needed in their NTT form (s1_hat/s2_hat/t0_hat) past this point; k_seed
    // was only needed to derive rho_pp above.
    secure_zeroize(&mut parts.s1);
    secure_zeroize(&mut parts.s2);
    secure_zeroize(&mut parts.t0);
    secure_zeroize(&mut parts.k_seed);

    let alpha = 2 * P::GAMMA2;
    let mut kappa: u32 = 0;
    let mut result: Option<Vec<u8>> = None;

    while kappa < MAX_SIGN_ITERATIONS {
        let nonce_base = kappa * P::L as u32;
        let y = sampling::expand_mask(&rho_pp, nonce_base as u16, P::L, P::GAMMA1, P::GAMMA1_BW);
        let mut y_vec = PolyVec(y);
        let mut y_hat = y_vec.clone();
        y_hat.ntt();

        let mut w = a_hat.mul_vec_ntt(&y_hat);
        w.inv_ntt();
        secure_zeroize(&mut y_hat);

        let w1 = w.high_bits(alpha);
        let w1_bytes = w1_encode(&w1, P::W1_BW);
        let c_tilde = shake256_xof(&[&mu, &w1_bytes], 2 * P::LAMBDA / 8);

        let c = sampling::sample_in_ball(&c_tilde, P::TAU);
        let mut c_hat = c;
        c_hat.ntt();

        let mut cs1 = s1_hat.scalar_mul_ntt(&c_hat);
        cs1.inv_ntt();
        let mut cs2 = s2_hat.scalar_mul_ntt(&c_hat);
        cs2.inv_ntt();

        let mut z = y_vec.add(&cs1);
        secure_zeroize(&mut y_vec);
        secure_zeroize(&mut cs1);

        if z.infinity_norm() >= P::GAMMA1 - P::BETA {
            secure_zeroize(&mut z);
            secure_zeroize(&mut cs2);
            kappa += 1;
            continue;
        }

        let w_minus_cs2 = w.sub(&cs2);
        let r0 = w_minus_cs2.low_bits(alpha);
        if r0.infinity_norm() >= P::GAMMA2 - P::BETA {
            secure_zeroize(&mut z);
            secure_zeroize(&mut cs2);
            kappa += 1;
            continue;
        }
        secure_zeroize(&mut cs2);

        let mut ct0 = t0_hat.scalar_mul_ntt(&c_hat);
        ct0.inv_ntt();
        if ct0.infinity_norm() >= P::GAMMA2 {
            secure_zeroize(&mut z);
            secure_zeroize(&mut ct0);
            kappa += 1;
            continue;
        }

        let mut neg_ct0 = ct0.neg();
        let hint_target = w_minus_cs2.add(&ct0);
        let (hints, weight) = neg_ct0.make_hint(&hint_target, alpha);
        secure_zeroize(&mut ct0);
        secure_zeroize(&mut neg_ct0);

        if weight > P::OMEGA {
            secure_zeroize(&mut z);
            kappa += 1;
            continue;
        }

        let sig = sig_encode::<P>(&c_tilde, &z, &hints);
        secure_zeroize(&mut z);
        result = Some(sig);
        break;
    }

    secure_zeroize(&mut mu);
    secure_zeroize(&mut rho_pp);
    secure_zeroize(&mut s1_hat);
    secure_zeroize(&mut s2_hat);
    secure_zeroize(&mut t0_hat);

    result
}

/// Generic `Verify`.
pub fn verify<P: ParameterSet>(pk: &[u8], msg: &[u8], ctx: &[u8], sig: &[u8]) -> bool {
    if pk.len() != P::PK_LEN {
        return false;
    }
    let Some(msg_prime) = message_representative(msg, ctx) else {
        return false;
    };
    let Some(signature) = sig_decode::<P>(sig) else {
        return false;
    };

    if signature.z.infinity_norm() >= P::GAMMA1 - P::BETA {
        return false;
    }

    let (rho, t1) = pk_decode::<P>(pk);
    let rho_arr: [u8; 32] = rho[..].try_into().unwrap();
    let a_hat = sampling::expand_a(&rho_arr, P::K, P::L);

    let tr = shake256_xof(&[pk], 64);
    let mu = shake256_xof(&[&tr, &msg_prime], 64);

    let c = sampling::sample_in_ball(&signature.c_tilde, P::TAU);
    let mut c_hat = c;
    c_hat.ntt();

    let mut z_hat = signature.z.clone();
    z_hat.ntt();
    let mut az = a_hat.mul_vec_ntt(&z_hat);

    let t1_shifted = t1.shl(D);
    let mut t1_shifted_hat = t1_shifted;
    t1_shifted_hat.ntt();
    let ct1 = t1_shifted_hat.scalar_mul_ntt(&c_hat);

    for i in 0..P::K {
        az.0[i] -= ct1.0[i];
    }
    az.inv_ntt();

    let alpha = 2 * P::GAMMA2;
    let w1_prime = az.use_hint(&signature.hints, alpha);
    let w1_bytes = w1_encode(&w1_prime, P::W1_BW);
    let c_tilde_prime = shake256_xof(&[&mu, &w1_bytes], 2 * P::LAMBDA / 8);

    c_tilde_prime == signature.c_tilde
}
