//! ML-KEM key encapsulation
//!
//! The module-lattice KEM standardized by NIST, at the three security
//! levels 512, 768 and 1024. The arithmetic engine lives in
//! `mlkem-algorithms`; this crate composes it into the CPA-secure
//! encryption scheme and the CCA-secure KEM.

pub mod mlkem;

pub use mlkem::{MlKem, MlKem1024, MlKem512, MlKem768, SecurityLevel};
pub use mlkem::{MlKemCiphertext, MlKemPublicKey, MlKemSecretKey, MlKemSharedSecret};
