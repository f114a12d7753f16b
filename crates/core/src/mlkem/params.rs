//! ML-KEM parameter definitions

use mlkem_params::pqc::mlkem as global_params;

/// Shared secret size for all variants.
pub const MLKEM_SS_BYTES: usize = global_params::MLKEM_SS_BYTES;
/// Seed and message size (ρ, σ, z and m are all 32 bytes).
pub const MLKEM_SEED_BYTES: usize = global_params::MLKEM_SEED_BYTES;

/// Trait defining the parameters of one ML-KEM variant.
pub trait MlKemParams: Send + Sync + 'static {
    /// Module rank k (vector length, matrix dimension).
    const K: usize;
    /// Noise width η₁ for the secret and error vectors of key
    /// generation and for the encryption vector y.
    const ETA1: u8;
    /// Noise width η₂ for the encryption errors e₁, e₂.
    const ETA2: u8;
    /// Compression depth for the u ciphertext component.
    const DU: usize;
    /// Compression depth for the v ciphertext component.
    const DV: usize;

    /// Algorithm name string.
    const NAME: &'static str;
    /// Encapsulation key size in bytes.
    const PUBLIC_KEY_BYTES: usize;
    /// Decapsulation key size in bytes.
    const SECRET_KEY_BYTES: usize;
    /// Ciphertext size in bytes.
    const CIPHERTEXT_BYTES: usize;
}

/// ML-KEM-512 parameters.
pub struct MlKem512Params;
impl MlKemParams for MlKem512Params {
    const K: usize = global_params::MLKEM512.k;
    const ETA1: u8 = global_params::MLKEM512.eta1;
    const ETA2: u8 = global_params::MLKEM512.eta2;
    const DU: usize = global_params::MLKEM512.du;
    const DV: usize = global_params::MLKEM512.dv;
    const NAME: &'static str = "ML-KEM-512";
    const PUBLIC_KEY_BYTES: usize = global_params::MLKEM512.public_key_size;
    const SECRET_KEY_BYTES: usize = global_params::MLKEM512.secret_key_size;
    const CIPHERTEXT_BYTES: usize = global_params::MLKEM512.ciphertext_size;
}

/// ML-KEM-768 parameters.
pub struct MlKem768Params;
impl MlKemParams for MlKem768Params {
    const K: usize = global_params::MLKEM768.k;
    const ETA1: u8 = global_params::MLKEM768.eta1;
    const ETA2: u8 = global_params::MLKEM768.eta2;
    const DU: usize = global_params::MLKEM768.du;
    const DV: usize = global_params::MLKEM768.dv;
    const NAME: &'static str = "ML-KEM-768";
    const PUBLIC_KEY_BYTES: usize = global_params::MLKEM768.public_key_size;
    const SECRET_KEY_BYTES: usize = global_params::MLKEM768.secret_key_size;
    const CIPHERTEXT_BYTES: usize = global_params::MLKEM768.ciphertext_size;
}

/// ML-KEM-1024 parameters.
pub struct MlKem1024Params;
impl MlKemParams for MlKem1024Params {
    const K: usize = global_params::MLKEM1024.k;
    const ETA1: u8 = global_params::MLKEM1024.eta1;
    const ETA2: u8 = global_params::MLKEM1024.eta2;
    const DU: usize = global_params::MLKEM1024.du;
    const DV: usize = global_params::MLKEM1024.dv;
    const NAME: &'static str = "ML-KEM-1024";
    const PUBLIC_KEY_BYTES: usize = global_params::MLKEM1024.public_key_size;
    const SECRET_KEY_BYTES: usize = global_params::MLKEM1024.secret_key_size;
    const CIPHERTEXT_BYTES: usize = global_params::MLKEM1024.ciphertext_size;
}
