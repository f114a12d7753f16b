//! Arithmetic and hashing primitives for the mlkem workspace
//!
//! Layered bottom-up: Keccak-f[1600] and the FIPS 202 functions built on
//! it (SHA3-256/512, SHAKE-128/256), then the polynomial ring over
//! Z_3329[x]/(x^256+1) with its NTT engine, samplers and byte codecs.
//! The KEM composition itself lives in `mlkem-core`.

pub mod cpu;
pub mod error;
pub mod hash;
pub mod keccak;
pub mod poly;
pub mod xof;

pub use error::{Error, Result};
