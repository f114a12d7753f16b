//! Extendable Output Functions (XOF)
//!
//! SHAKE-128 drives the public-matrix sampler; SHAKE-256 is the noise
//! PRF and the implicit-rejection function J.

use crate::error::{validate, Result};

pub mod shake;

pub use shake::{Shake128Xof, Shake256Xof};

/// Trait for extendable output functions.
///
/// The state machine is absorb-then-squeeze: `update` may be called any
/// number of times, the first `squeeze` finalizes the input, and further
/// `update` calls fail until `reset`.
pub trait ExtendableOutputFunction {
    /// Creates a new instance of the XOF.
    fn new() -> Self;

    /// Updates the XOF state with new data.
    fn update(&mut self, data: &[u8]) -> Result<()>;

    /// Squeezes output bytes into the provided buffer.
    fn squeeze(&mut self, output: &mut [u8]) -> Result<()>;

    /// Squeezes the specified number of output bytes into a new vector.
    fn squeeze_into_vec(&mut self, len: usize) -> Result<Vec<u8>>;

    /// Resets the XOF to its initial state.
    fn reset(&mut self) -> Result<()>;

    /// Security level in bits.
    fn security_level() -> usize;

    /// Convenience: absorb `data` and squeeze `len` bytes in one call.
    fn generate(data: &[u8], len: usize) -> Result<Vec<u8>>
    where
        Self: Sized,
    {
        validate::parameter(len > 0, "output_length", "XOF output length must be > 0")?;

        let mut xof = Self::new();
        xof.update(data)?;
        xof.squeeze_into_vec(len)
    }
}
