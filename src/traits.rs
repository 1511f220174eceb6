//! Fixed-size byte-array newtypes shared by the `mldsa44`/`mldsa65`/`mldsa87` modules, plus the
//! single error type this crate exposes.
//!
//! Cryptographic failure is never a `Result`: `sign` returns `None`, `verify` returns `bool`
//! (mirroring the boolean/`Option` signature FIPS 204 itself specifies). `ConstructionError`
//! exists only at the API boundary, for turning a caller-supplied byte slice of the wrong length
//! into a `PublicKey`/`SecretKey`/`Signature`.

use core::ops::Deref;

use subtle::ConstantTimeEq;
use zeroize::Zeroize;

/// Returned by `TryFrom<&[u8]>` when a caller-supplied slice is the wrong length to decode into
/// one of this crate's key or signature types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("expected {expected} bytes, got {actual}")]
pub struct ConstructionError {
    pub expected: usize,
    pub actual: usize,
}

/// A public key, signature, or other non-secret fixed-size byte blob. Constant-time equality
/// is provided so callers comparing keys/signatures don't accidentally introduce a timing
/// side-channel with `==`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PublicKey<const N: usize>(pub [u8; N]);

impl<const N: usize> AsRef<[u8]> for PublicKey<N> {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl<const N: usize> Deref for PublicKey<N> {
    type Target = [u8; N];
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<const N: usize> ConstantTimeEq for PublicKey<N> {
    fn ct_eq(&self, other: &Self) -> subtle::Choice {
        self.0.ct_eq(&other.0)
    }
}

impl<const N: usize> TryFrom<&[u8]> for PublicKey<N> {
    type Error = ConstructionError;
    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        if bytes.len() != N {
            return Err(ConstructionError { expected: N, actual: bytes.len() });
        }
        let mut out = [0u8; N];
        out.copy_from_slice(bytes);
        Ok(PublicKey(out))
    }
}

/// A secret key. Zeroizes its backing bytes on drop.
#[derive(Clone, Debug, Zeroize)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[zeroize(drop)]
pub struct SecretKey<const N: usize>(pub [u8; N]);

impl<const N: usize> AsRef<[u8]> for SecretKey<N> {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl<const N: usize> Deref for SecretKey<N> {
    type Target = [u8; N];
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<const N: usize> TryFrom<&[u8]> for SecretKey<N> {
    type Error = ConstructionError;
    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        if bytes.len() != N {
            return Err(ConstructionError { expected: N, actual: bytes.len() });
        }
        let mut out = [0u8; N];
        out.copy_from_slice(bytes);
        Ok(SecretKey(out))
    }
}

/// A signature.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Signature<const N: usize>(pub [u8; N]);

impl<const N: usize> AsRef<[u8]> for Signature<N> {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl<const N: usize> Deref for Signature<N> {
    type Target = [u8; N];
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<const N: usize> ConstantTimeEq for Signature<N> {
    fn ct_eq(&self, other: &Self) -> subtle::Choice {
        self.0.ct_eq(&other.0)
    }
}

impl<const N: usize> TryFrom<&[u8]> for Signature<N> {
    type Error = ConstructionError;
    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        if bytes.len() != N {
            return Err(ConstructionError { expected: N, actual: bytes.len() });
        }
        let mut out = [0u8; N];
        out.copy_from_slice(bytes);
        Ok(Signature(out))
    }
}
