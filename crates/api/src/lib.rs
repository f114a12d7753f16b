//! Public API traits and types for the mlkem workspace
//!
//! This crate carries the outward-facing surface: the `Kem` trait, the
//! serialization contracts, the error kinds a caller can observe and the
//! secret byte-blob types the concrete KEMs hand out.

pub mod error;
pub mod traits;
pub mod types;

pub use error::{Error, Result};
pub use traits::{Kem, Serialize, SerializeSecret};
pub use types::SecretBytes;
