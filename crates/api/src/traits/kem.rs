//! Trait definition for Key Encapsulation Mechanisms (KEM)
//!
//! A KEM is the triple (keypair, encapsulate, decapsulate) producing a
//! shared secret on both sides. The associated types carry the
//! serialization and zeroization contracts each role requires.

use super::serialize::{Serialize, SerializeSecret};
use crate::Result;
use rand::{CryptoRng, RngCore};
use zeroize::Zeroize;

/// Trait for a Key Encapsulation Mechanism with domain-specific types.
pub trait Kem {
    /// Public (encapsulation) key.
    type PublicKey: Clone + Serialize;

    /// Secret (decapsulation) key. Zeroized on drop; serialized only
    /// through the zeroizing path.
    type SecretKey: Zeroize + Clone + SerializeSecret;

    /// The 32-byte shared secret. Must be fed into key derivation
    /// immediately and never stored long-term.
    type SharedSecret: Zeroize + Clone + SerializeSecret;

    /// Encapsulated key ciphertext.
    type Ciphertext: Clone + Serialize;

    /// Keypair handle returned by `keypair`.
    type KeyPair: Clone;

    /// Algorithm name, e.g. "ML-KEM-768".
    fn name() -> &'static str;

    /// Generate a new keypair from the supplied CSPRNG.
    ///
    /// An RNG failure is fatal: the error is returned and no key
    /// material is produced.
    fn keypair<R: CryptoRng + RngCore>(rng: &mut R) -> Result<Self::KeyPair>;

    /// Extract the public key from a keypair.
    fn public_key(keypair: &Self::KeyPair) -> Self::PublicKey;

    /// Extract the secret key from a keypair.
    fn secret_key(keypair: &Self::KeyPair) -> Self::SecretKey;

    /// Encapsulate a fresh shared secret to the given public key.
    ///
    /// Validates the public key (length and coefficient range) before
    /// using it.
    fn encapsulate<R: CryptoRng + RngCore>(
        rng: &mut R,
        public_key: &Self::PublicKey,
    ) -> Result<(Self::Ciphertext, Self::SharedSecret)>;

    /// Decapsulate a shared secret.
    ///
    /// Runs in time independent of the secret key and ciphertext
    /// contents. A ciphertext that fails re-encryption yields a
    /// pseudorandom secret (implicit rejection), never an error.
    fn decapsulate(
        secret_key: &Self::SecretKey,
        ciphertext: &Self::Ciphertext,
    ) -> Result<Self::SharedSecret>;
}
