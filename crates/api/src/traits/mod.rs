//! Trait definitions forming the public API surface.

pub mod kem;
pub mod serialize;

pub use kem::Kem;
pub use serialize::{Serialize, SerializeSecret};
