//! Fixed-output hash functions
//!
//! Only the two SHA-3 instances the KEM needs: SHA3-256 (the scheme's H)
//! and SHA3-512 (the scheme's G).

use crate::error::Result;

pub mod sha3;

pub use sha3::{Sha3_256, Sha3_512};

/// Trait for fixed-output hash functions.
pub trait HashFunction {
    /// Digest size in bytes.
    const OUTPUT_SIZE: usize;

    /// Digest type, a fixed-size byte array.
    type Output: AsRef<[u8]> + Clone;

    /// Algorithm name, e.g. "SHA3-256".
    fn name() -> &'static str;

    /// Create a fresh hasher.
    fn new() -> Self;

    /// Feed message bytes. Fails after `finalize`.
    fn update(&mut self, data: &[u8]) -> Result<()>;

    /// Produce the digest and seal the hasher.
    fn finalize(&mut self) -> Result<Self::Output>;

    /// One-shot convenience digest.
    fn digest(data: &[u8]) -> Result<Self::Output>
    where
        Self: Sized,
    {
        let mut hasher = Self::new();
        hasher.update(data)?;
        hasher.finalize()
    }
}
