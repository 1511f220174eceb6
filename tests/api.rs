//! End-to-end API ergonomics across all three parameter sets.

use std::time::Instant;

use ml_dsa_native::{mldsa44, mldsa65, mldsa87};

#[test]
fn test_mldsa44_keygen_sign_verify() {
    let start = Instant::now();
    let (pk, sk) = mldsa44::keygen(&[1u8; 32]);
    let sig = mldsa44::sign(&[2u8; 32], &sk, b"api smoke test", b"").unwrap();
    assert!(mldsa44::verify(&pk, b"api smoke test", b"", &sig));
    println!("[timing] test_mldsa44_keygen_sign_verify: {:?}", start.elapsed());
}

#[test]
fn test_mldsa65_keygen_sign_verify() {
    let start = Instant::now();
    let (pk, sk) = mldsa65::keygen(&[3u8; 32]);
    let sig = mldsa65::sign(&[4u8; 32], &sk, b"api smoke test", b"").unwrap();
    assert!(mldsa65::verify(&pk, b"api smoke test", b"", &sig));
    println!("[timing] test_mldsa65_keygen_sign_verify: {:?}", start.elapsed());
}

#[test]
fn test_mldsa87_keygen_sign_verify() {
    let start = Instant::now();
    let (pk, sk) = mldsa87::keygen(&[5u8; 32]);
    let sig = mldsa87::sign(&[6u8; 32], &sk, b"api smoke test", b"").unwrap();
    assert!(mldsa87::verify(&pk, b"api smoke test", b"", &sig));
    println!("[timing] test_mldsa87_keygen_sign_verify: {:?}", start.elapsed());
}

#[test]
fn test_context_string_is_authenticated() {
    let (pk, sk) = mldsa44::keygen(&[7u8; 32]);
    let sig = mldsa44::sign(&[8u8; 32], &sk, b"msg", b"context-a").unwrap();
    assert!(mldsa44::verify(&pk, b"msg", b"context-a", &sig));
    assert!(!mldsa44::verify(&pk, b"msg", b"context-b", &sig));
    assert!(!mldsa44::verify(&pk, b"msg", b"", &sig));
}

#[test]
fn test_context_at_max_length_is_accepted() {
    let (pk, sk) = mldsa44::keygen(&[9u8; 32]);
    let ctx = vec![0x42u8; 255];
    let sig = mldsa44::sign(&[10u8; 32], &sk, b"msg", &ctx).unwrap();
    assert!(mldsa44::verify(&pk, b"msg", &ctx, &sig));
}

#[test]
fn test_context_over_max_length_is_rejected_at_sign_time() {
    let (_pk, sk) = mldsa44::keygen(&[11u8; 32]);
    let ctx = vec![0x42u8; 256];
    assert!(mldsa44::sign(&[12u8; 32], &sk, b"msg", &ctx).is_none());
}

#[test]
fn test_empty_message_is_signable() {
    let (pk, sk) = mldsa44::keygen(&[13u8; 32]);
    let sig = mldsa44::sign(&[14u8; 32], &sk, b"", b"").unwrap();
    assert!(mldsa44::verify(&pk, b"", b"", &sig));
}

#[test]
fn test_public_key_and_signature_try_from_round_trip() {
    use ml_dsa_native::traits::{PublicKey, Signature};

    let (pk, sk) = mldsa44::keygen(&[15u8; 32]);
    let sig = mldsa44::sign(&[16u8; 32], &sk, b"msg", b"").unwrap();

    let pk_bytes = pk.as_ref().to_vec();
    let reconstructed: PublicKey<{ mldsa44::PK_LEN }> = pk_bytes.as_slice().try_into().unwrap();
    assert_eq!(reconstructed, pk);

    let sig_bytes = sig.as_ref().to_vec();
    let reconstructed_sig: Signature<{ mldsa44::SIG_LEN }> = sig_bytes.as_slice().try_into().unwrap();
    assert_eq!(reconstructed_sig, sig);
}
