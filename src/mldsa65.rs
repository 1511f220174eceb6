//! ML-DSA-65 (NIST security category 3).
//!
//! Thin wrapper over the generic [`crate::scheme`] core, fixing the parameter set to
//! [`MlDsa65`] and exposing fixed-size byte-array key/signature types.

use crate::params::{MlDsa65, ParameterSet};
use crate::scheme;
use crate::traits::{PublicKey as PublicKeyBytes, SecretKey as SecretKeyBytes, Signature as SignatureBytes};

pub const PK_LEN: usize = MlDsa65::PK_LEN;
pub const SK_LEN: usize = MlDsa65::SK_LEN;
pub const SIG_LEN: usize = MlDsa65::SIG_LEN;

pub type PublicKey = PublicKeyBytes<PK_LEN>;
pub type SecretKey = SecretKeyBytes<SK_LEN>;
pub type Signature = SignatureBytes<SIG_LEN>;

/// Deterministically derives a keypair from a 32-byte seed.
pub fn keygen(seed: &[u8; 32]) -> (PublicKey, SecretKey) {
    let (pk, sk) = scheme::keygen::<MlDsa65>(seed);
    (
        PublicKey(pk.try_into().expect("scheme::keygen returns PK_LEN bytes")),
        SecretKey(sk.try_into().expect("scheme::keygen returns SK_LEN bytes")),
    )
}

/// Signs `msg` under `ctx` (at most 255 bytes) using 32 bytes of fresh randomness `rnd`.
/// Returns `None` only if `ctx` is too long.
pub fn sign(rnd: &[u8; 32], sk: &SecretKey, msg: &[u8], ctx: &[u8]) -> Option<Signature> {
    let sig = scheme::sign::<MlDsa65>(rnd, sk.as_ref(), msg, ctx)?;
    Some(Signature(sig.try_into().expect("scheme::sign returns SIG_LEN bytes")))
}

/// Verifies `sig` over `msg` under `ctx` against `pk`.
pub fn verify(pk: &PublicKey, msg: &[u8], ctx: &[u8], sig: &Signature) -> bool {
    scheme::verify::<MlDsa65>(pk.as_ref(), msg, ctx, sig.as_ref())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn byte_lengths_match_fips_204_table_2() {
        assert_eq!(PK_LEN, 1952);
        assert_eq!(SK_LEN, 4032);
        assert_eq!(SIG_LEN, 3309);
    }

    #[test]
    fn roundtrip() {
        let (pk, sk) = keygen(&[2u8; 32]);
        let sig = sign(&[3u8; 32], &sk, b"hello, ml-dsa-65", b"").unwrap();
        assert!(verify(&pk, b"hello, ml-dsa-65", b"", &sig));
    }
}
