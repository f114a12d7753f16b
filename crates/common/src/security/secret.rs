//! Type-safe wrappers for sensitive data that ensure proper cleanup when
//! the data is no longer needed.

use core::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Trait for types that can be securely zeroed and cloned.
pub trait SecureZeroingType: Zeroize + Clone {
    /// Create a zeroed instance.
    fn zeroed() -> Self;

    /// Create a clone that preserves the zeroization guarantees of the
    /// original.
    fn secure_clone(&self) -> Self {
        self.clone()
    }
}

/// Fixed-size secret buffer that guarantees zeroization on drop.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SecretBuffer<const N: usize> {
    data: [u8; N],
}

impl<const N: usize> SecretBuffer<N> {
    /// Create a new secret buffer with the given data.
    pub fn new(data: [u8; N]) -> Self {
        Self { data }
    }

    /// Create a zeroed secret buffer.
    pub fn zeroed() -> Self {
        Self { data: [0u8; N] }
    }

    /// Length of the buffer in bytes.
    pub fn len(&self) -> usize {
        N
    }

    /// Whether the buffer is empty (only for N = 0).
    pub fn is_empty(&self) -> bool {
        N == 0
    }

    /// Immutable view of the contents.
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    /// Mutable view of the contents.
    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.data
    }
}

impl<const N: usize> SecureZeroingType for SecretBuffer<N> {
    fn zeroed() -> Self {
        Self::zeroed()
    }

    fn secure_clone(&self) -> Self {
        Self::new(self.data)
    }
}

impl<const N: usize> AsRef<[u8]> for SecretBuffer<N> {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl<const N: usize> AsMut<[u8]> for SecretBuffer<N> {
    fn as_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }
}

impl<const N: usize> fmt::Debug for SecretBuffer<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SecretBuffer<{}>([REDACTED])", N)
    }
}
