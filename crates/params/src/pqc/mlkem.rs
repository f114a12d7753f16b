//! Constants for the ML-KEM key encapsulation mechanism
//!
//! The ring degree and modulus are shared by all three parameter sets;
//! only the module rank k, the noise widths and the ciphertext
//! compression depths vary.

/// Polynomial degree n (number of coefficients per ring element).
pub const MLKEM_N: usize = 256;

/// Coefficient modulus q. Prime, with q ≡ 1 mod 2n.
pub const MLKEM_Q: u16 = 3329;

/// Shared secret size in bytes, identical across all parameter sets.
pub const MLKEM_SS_BYTES: usize = 32;

/// Seed sizes: ρ (matrix seed), σ (noise seed), z (implicit-rejection
/// secret) and the encapsulated message m are all 32 bytes.
pub const MLKEM_SEED_BYTES: usize = 32;

/// Structure describing one ML-KEM parameter set.
pub struct MlKemParamSet {
    /// Polynomial degree.
    pub n: usize,

    /// Coefficient modulus.
    pub q: u16,

    /// Module rank k (dimension of vectors and of the k×k matrix).
    pub k: usize,

    /// Noise width η₁ for the secret vector s and error vector e.
    pub eta1: u8,

    /// Noise width η₂ for the encryption errors e₁, e₂.
    pub eta2: u8,

    /// Per-coefficient compression depth for the u ciphertext component.
    pub du: usize,

    /// Compression depth for the v ciphertext component.
    pub dv: usize,

    /// Size of the encapsulation (public) key in bytes.
    pub public_key_size: usize,

    /// Size of the decapsulation (secret) key in bytes.
    pub secret_key_size: usize,

    /// Size of the ciphertext in bytes.
    pub ciphertext_size: usize,

    /// Size of the shared secret in bytes.
    pub shared_secret_size: usize,
}

/// ML-KEM-512 parameters (NIST security category 1).
pub const MLKEM512: MlKemParamSet = MlKemParamSet {
    n: MLKEM_N,
    q: MLKEM_Q,
    k: 2,
    eta1: 3,
    eta2: 2,
    du: 10,
    dv: 4,
    public_key_size: 800,
    secret_key_size: 1632,
    ciphertext_size: 768,
    shared_secret_size: MLKEM_SS_BYTES,
};

/// ML-KEM-768 parameters (NIST security category 3).
pub const MLKEM768: MlKemParamSet = MlKemParamSet {
    n: MLKEM_N,
    q: MLKEM_Q,
    k: 3,
    eta1: 2,
    eta2: 2,
    du: 10,
    dv: 4,
    public_key_size: 1184,
    secret_key_size: 2400,
    ciphertext_size: 1088,
    shared_secret_size: MLKEM_SS_BYTES,
};

/// ML-KEM-1024 parameters (NIST security category 5).
pub const MLKEM1024: MlKemParamSet = MlKemParamSet {
    n: MLKEM_N,
    q: MLKEM_Q,
    k: 4,
    eta1: 2,
    eta2: 2,
    du: 11,
    dv: 5,
    public_key_size: 1568,
    secret_key_size: 3168,
    ciphertext_size: 1568,
    shared_secret_size: MLKEM_SS_BYTES,
};

#[cfg(test)]
mod tests {
    use super::*;

    // |ek| = 384k + 32, |dk| = 768k + 96, |ct| = 32(du·k + dv)
    fn check_sizes(p: &MlKemParamSet) {
        assert_eq!(p.public_key_size, 384 * p.k + 32);
        assert_eq!(p.secret_key_size, 768 * p.k + 96);
        assert_eq!(p.ciphertext_size, 32 * (p.du * p.k + p.dv));
        assert_eq!(p.shared_secret_size, 32);
        assert_eq!(p.n, 256);
        assert_eq!(p.q, 3329);
    }

    #[test]
    fn derived_sizes_are_consistent() {
        check_sizes(&MLKEM512);
        check_sizes(&MLKEM768);
        check_sizes(&MLKEM1024);
    }

    #[test]
    fn fixed_size_table() {
        assert_eq!(
            (MLKEM512.public_key_size, MLKEM512.secret_key_size, MLKEM512.ciphertext_size),
            (800, 1632, 768)
        );
        assert_eq!(
            (MLKEM768.public_key_size, MLKEM768.secret_key_size, MLKEM768.ciphertext_size),
            (1184, 2400, 1088)
        );
        assert_eq!(
            (MLKEM1024.public_key_size, MLKEM1024.secret_key_size, MLKEM1024.ciphertext_size),
            (1568, 3168, 1568)
        );
    }
}
