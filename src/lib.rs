//! # mlkem
//!
//! Module-lattice key encapsulation (ML-KEM) at the three standardized
//! security levels.
//!
//! ## Usage
//!
//! ```
//! use mlkem::prelude::*;
//! use rand::rngs::OsRng;
//!
//! let (pk, sk) = MlKem768::keypair(&mut OsRng)?;
//! let (ct, secret_enc) = MlKem768::encapsulate(&mut OsRng, &pk)?;
//! let secret_dec = MlKem768::decapsulate(&sk, &ct)?;
//! assert_eq!(secret_enc.as_bytes(), secret_dec.as_bytes());
//! # Ok::<(), mlkem::api::Error>(())
//! ```
//!
//! Callers that read the level from configuration can bind it at run
//! time instead:
//!
//! ```
//! use mlkem::MlKem;
//! use rand::rngs::OsRng;
//!
//! let kem = MlKem::new(512)?;
//! let (ek, dk) = kem.keygen(&mut OsRng)?;
//! let (ct, secret) = kem.encaps(&ek, &mut OsRng)?;
//! assert_eq!(kem.decaps(&dk, &ct)?, secret);
//! # Ok::<(), mlkem::api::Error>(())
//! ```
//!
//! ## Crate structure
//!
//! This is a facade over the workspace members:
//!
//! - `mlkem-api`: public traits, error kinds, byte-blob types
//! - `mlkem-algorithms`: Keccak, the NTT engine, samplers and codecs
//! - `mlkem-core`: K-PKE and the CCA-secure KEM composition
//! - `mlkem-params`: parameter-set constants
//! - `mlkem-common` / `mlkem-internal`: secret buffers, constant time

pub use mlkem_api as api;
pub use mlkem_algorithms as algorithms;
pub use mlkem_common as common;
pub use mlkem_internal as internal;
pub use mlkem_params as params;

pub use mlkem_core::mlkem::{encaps_derand, keygen_derand};
pub use mlkem_core::{MlKem, MlKem1024, MlKem512, MlKem768, SecurityLevel};
pub use mlkem_core::{MlKemCiphertext, MlKemPublicKey, MlKemSecretKey, MlKemSharedSecret};

/// Constant-time byte equality, exported so callers and test suites
/// compare secrets without writing their own comparison.
pub use mlkem_internal::constant_time::ct_eq as equal_ct;

/// Common imports for mlkem users.
pub mod prelude {
    pub use crate::api::{Error, Kem, Result, Serialize, SerializeSecret};
    pub use crate::common::{SecretBuffer, SecureZeroingType};
    pub use crate::{MlKem, MlKem1024, MlKem512, MlKem768, SecurityLevel};
}
