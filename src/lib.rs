#![no_std]

//! A pure-Rust implementation of NIST FIPS 204 (Module-Lattice-Based Digital Signature
//! Standard, ML-DSA) in its three parameter sets: ML-DSA-44, ML-DSA-65, ML-DSA-87.
//!
//! Use [`mldsa44`], [`mldsa65`], or [`mldsa87`] for a fixed parameter set with fixed-size
//! byte-array keys and signatures, or [`scheme`] directly to stay generic over
//! [`params::ParameterSet`].

extern crate alloc;

pub mod field;
pub mod ntt;
pub mod packing;
pub mod params;
pub mod poly;
pub mod polyvec;
pub mod reduction;
pub mod sampling;
pub mod scheme;
pub mod traits;
pub mod utils;

pub mod mldsa44;
pub mod mldsa65;
pub mod mldsa87;
