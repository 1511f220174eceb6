//! ML-DSA-44 (NIST security category 2), the smallest of the three parameter sets.
//!
//! Thin wrapper over the generic [`crate::scheme`] core, fixing the parameter set to
//! [`MlDsa44`] and exposing fixed-size byte-array key/signature types.

use crate::params::{MlDsa44, ParameterSet};
use crate::scheme;
use crate::traits::{PublicKey as PublicKeyBytes, SecretKey as SecretKeyBytes, Signature as SignatureBytes};

pub const PK_LEN: usize = MlDsa44::PK_LEN;
pub const SK_LEN: usize = MlDsa44::SK_LEN;
pub const SIG_LEN: usize = MlDsa44::SIG_LEN;

pub type PublicKey = PublicKeyBytes<PK_LEN>;
pub type SecretKey = SecretKeyBytes<SK_LEN>;
pub type Signature = SignatureBytes<SIG_LEN>;

/// Deterministically derives a keypair from a 32-byte seed.
pub fn keygen(seed: &[u8; 32]) -> (PublicKey, SecretKey) {
    let (pk, sk) = scheme::keygen::<MlDsa44>(seed);
    (
        PublicKey(pk.try_into().expect("scheme::keygen returns PK_LEN bytes")),
        SecretKey(sk.try_into().expect("scheme::keygen returns SK_LEN bytes")),
    )
}

/// Signs `msg` under `ctx` (at most 255 bytes) using 32 bytes of fresh randomness `rnd`.
/// Returns `None` only if `ctx` is too long.
pub fn sign(rnd: &[u8; 32], sk: &SecretKey, msg: &[u8], ctx: &[u8]) -> Option<Signature> {
    let sig = scheme::sign::<MlDsa44>(rnd, sk.as_ref(), msg, ctx)?;
    Some(Signature(sig.try_into().expect("scheme::sign returns SIG_LEN bytes")))
}

/// Verifies `sig` over `msg` under `ctx` against `pk`.
pub fn verify(pk: &PublicKey, msg: &[u8], ctx: &[u8], sig: &Signature) -> bool {
    scheme::verify::<MlDsa44>(pk.as_ref(), msg, ctx, sig.as_ref())
}
