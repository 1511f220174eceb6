//! Self-consistency ("known-answer") tests: fixed seeds produce fixed-length, stable,
//! cross-checkable output. There is no official ACVP test vector corpus in this workspace, so
//! these tests check internal consistency (same seed always yields the same keys/signature,
//! across every parameter set) rather than matching externally published byte strings.

use ml_dsa_native::{mldsa44, mldsa65, mldsa87};

macro_rules! kat_suite {
    ($mod_name:ident, $suite:ident) => {
        mod $suite {
            use super::*;

            #[test]
            fn keygen_is_deterministic_given_identical_seed() {
                let (pk_a, sk_a) = $mod_name::keygen(&[0xab; 32]);
                let (pk_b, sk_b) = $mod_name::keygen(&[0xab; 32]);
                assert_eq!(pk_a, pk_b);
                assert_eq!(sk_a.as_ref(), sk_b.as_ref());
            }

            #[test]
            fn keygen_differs_across_seeds() {
                let (pk_a, _) = $mod_name::keygen(&[0x01; 32]);
                let (pk_b, _) = $mod_name::keygen(&[0x02; 32]);
                assert_ne!(pk_a, pk_b);
            }

            #[test]
            fn sign_is_deterministic_given_identical_rnd_and_message() {
                let (_pk, sk) = $mod_name::keygen(&[0x11; 32]);
                let sig_a = $mod_name::sign(&[0x22; 32], &sk, b"fixed message", b"").unwrap();
                let sig_b = $mod_name::sign(&[0x22; 32], &sk, b"fixed message", b"").unwrap();
                assert_eq!(sig_a, sig_b);
            }

            #[test]
            fn encoded_lengths_match_fips_204_table_2() {
                let (pk, sk) = $mod_name::keygen(&[0x33; 32]);
                let sig = $mod_name::sign(&[0x44; 32], &sk, b"length check", b"").unwrap();
                assert_eq!(pk.as_ref().len(), $mod_name::PK_LEN);
                assert_eq!(sk.as_ref().len(), $mod_name::SK_LEN);
                assert_eq!(sig.as_ref().len(), $mod_name::SIG_LEN);
            }

            #[test]
            fn round_trip_across_many_seeds() {
                for seed_byte in 0u8..8 {
                    let (pk, sk) = $mod_name::keygen(&[seed_byte; 32]);
                    let msg = [seed_byte; 16];
                    let sig = $mod_name::sign(&[seed_byte.wrapping_add(1); 32], &sk, &msg, b"").unwrap();
                    assert!(
                        $mod_name::verify(&pk, &msg, b"", &sig),
                        "round trip failed for seed byte {seed_byte}"
                    );
                }
            }
        }
    };
}

kat_suite!(mldsa44, mldsa44_kat);
kat_suite!(mldsa65, mldsa65_kat);
kat_suite!(mldsa87, mldsa87_kat);
