//! Secret data types with guaranteed zeroization

pub mod secret;

pub use secret::{SecretBuffer, SecureZeroingType};
