//! Runtime level dispatch
//!
//! The typed path (`MlKem512` etc.) fixes the parameter set at compile
//! time; `MlKem` binds it at construction instead, for callers that
//! read the level from configuration. Both paths share the same
//! underlying operations.

use mlkem_api::{Error as ApiError, Result as ApiResult, SecretBytes};
use rand::{CryptoRng, RngCore};

use super::ind_cca::{kem_decaps, kem_encaps, kem_keygen};
use super::params::{
    MlKem1024Params, MlKem512Params, MlKem768Params, MlKemParams, MLKEM_SS_BYTES,
};

/// The three standardized security levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SecurityLevel {
    /// ML-KEM-512 (category 1).
    MlKem512,
    /// ML-KEM-768 (category 3).
    MlKem768,
    /// ML-KEM-1024 (category 5).
    MlKem1024,
}

/// A KEM instance bound to a parameter set at construction time.
///
/// Instances hold no mutable state and are freely shareable; concurrent
/// operations need nothing more than independent instances.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MlKem {
    level: SecurityLevel,
}

impl MlKem {
    /// Bind an instance to a security level. Accepts 512, 768 or 1024;
    /// anything else is an invalid parameter.
    pub fn new(level: u32) -> ApiResult<Self> {
        let level = match level {
            512 => SecurityLevel::MlKem512,
            768 => SecurityLevel::MlKem768,
            1024 => SecurityLevel::MlKem1024,
            _ => {
                return Err(ApiError::InvalidParameter {
                    context: "security level",
                })
            }
        };
        Ok(Self { level })
    }

    /// The bound level.
    pub fn level(&self) -> SecurityLevel {
        self.level
    }

    /// Encapsulation key size in bytes.
    pub fn public_key_bytes(&self) -> usize {
        match self.level {
            SecurityLevel::MlKem512 => MlKem512Params::PUBLIC_KEY_BYTES,
            SecurityLevel::MlKem768 => MlKem768Params::PUBLIC_KEY_BYTES,
            SecurityLevel::MlKem1024 => MlKem1024Params::PUBLIC_KEY_BYTES,
        }
    }

    /// Decapsulation key size in bytes.
    pub fn secret_key_bytes(&self) -> usize {
        match self.level {
            SecurityLevel::MlKem512 => MlKem512Params::SECRET_KEY_BYTES,
            SecurityLevel::MlKem768 => MlKem768Params::SECRET_KEY_BYTES,
            SecurityLevel::MlKem1024 => MlKem1024Params::SECRET_KEY_BYTES,
        }
    }

    /// Ciphertext size in bytes.
    pub fn ciphertext_bytes(&self) -> usize {
        match self.level {
            SecurityLevel::MlKem512 => MlKem512Params::CIPHERTEXT_BYTES,
            SecurityLevel::MlKem768 => MlKem768Params::CIPHERTEXT_BYTES,
            SecurityLevel::MlKem1024 => MlKem1024Params::CIPHERTEXT_BYTES,
        }
    }

    /// Shared secret size in bytes, identical across levels.
    pub fn shared_secret_bytes(&self) -> usize {
        MLKEM_SS_BYTES
    }

    /// Generate a keypair; returns (ek bytes, dk bytes).
    pub fn keygen<R: RngCore + CryptoRng>(&self, rng: &mut R) -> ApiResult<(Vec<u8>, Vec<u8>)> {
        match self.level {
            SecurityLevel::MlKem512 => kem_keygen::<MlKem512Params, R>(rng),
            SecurityLevel::MlKem768 => kem_keygen::<MlKem768Params, R>(rng),
            SecurityLevel::MlKem1024 => kem_keygen::<MlKem1024Params, R>(rng),
        }
    }

    /// Encapsulate to an encoded key; returns (ciphertext, secret).
    pub fn encaps<R: RngCore + CryptoRng>(
        &self,
        ek_bytes: &[u8],
        rng: &mut R,
    ) -> ApiResult<(Vec<u8>, SecretBytes<MLKEM_SS_BYTES>)> {
        match self.level {
            SecurityLevel::MlKem512 => kem_encaps::<MlKem512Params, R>(ek_bytes, rng),
            SecurityLevel::MlKem768 => kem_encaps::<MlKem768Params, R>(ek_bytes, rng),
            SecurityLevel::MlKem1024 => kem_encaps::<MlKem1024Params, R>(ek_bytes, rng),
        }
    }

    /// Decapsulate an encoded ciphertext with an encoded key.
    pub fn decaps(
        &self,
        dk_bytes: &[u8],
        ct_bytes: &[u8],
    ) -> ApiResult<SecretBytes<MLKEM_SS_BYTES>> {
        match self.level {
            SecurityLevel::MlKem512 => kem_decaps::<MlKem512Params>(dk_bytes, ct_bytes),
            SecurityLevel::MlKem768 => kem_decaps::<MlKem768Params>(dk_bytes, ct_bytes),
            SecurityLevel::MlKem1024 => kem_decaps::<MlKem1024Params>(dk_bytes, ct_bytes),
        }
    }
}
