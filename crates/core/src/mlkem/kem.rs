//! Typed keys and the `Kem` trait implementation

use core::marker::PhantomData;

use mlkem_api::{
    Kem as KemTrait, Result as ApiResult, SecretBytes, Serialize, SerializeSecret,
};
use rand::{CryptoRng, RngCore};
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use super::ind_cca::{kem_decaps, kem_encaps, kem_keygen};
use super::params::{MlKemParams, MLKEM_SS_BYTES};

/// Encapsulation (public) key, stored as its wire encoding.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MlKemPublicKey(Vec<u8>);

impl MlKemPublicKey {
    /// Wrap an encoded key. Sizes are validated by the operations that
    /// consume the key, which know the parameter set.
    pub fn new(data: Vec<u8>) -> Self {
        Self(data)
    }

    /// The encoded bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Consume into the encoded bytes.
    pub fn into_vec(self) -> Vec<u8> {
        self.0
    }
}

impl Serialize for MlKemPublicKey {
    fn from_bytes(bytes: &[u8]) -> ApiResult<Self> {
        Ok(Self(bytes.to_vec()))
    }

    fn to_bytes(&self) -> Vec<u8> {
        self.0.clone()
    }
}

/// Decapsulation (secret) key, stored as its wire encoding and wiped on
/// drop.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct MlKemSecretKey(Vec<u8>);

impl MlKemSecretKey {
    /// Wrap an encoded key.
    pub fn new(data: Vec<u8>) -> Self {
        Self(data)
    }

    /// Length of the encoded key.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the key is empty (never true for a valid key).
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub(crate) fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl core::fmt::Debug for MlKemSecretKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("MlKemSecretKey")
            .field("length", &self.len())
            .finish()
    }
}

impl SerializeSecret for MlKemSecretKey {
    fn from_bytes(bytes: &[u8]) -> ApiResult<Self> {
        Ok(Self(bytes.to_vec()))
    }

    fn to_bytes_zeroizing(&self) -> Zeroizing<Vec<u8>> {
        Zeroizing::new(self.0.clone())
    }
}

/// Ciphertext carrying the encapsulated key.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MlKemCiphertext(Vec<u8>);

impl MlKemCiphertext {
    /// Wrap an encoded ciphertext.
    pub fn new(data: Vec<u8>) -> Self {
        Self(data)
    }

    /// The encoded bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Mutable access, used by tests to model on-the-wire corruption.
    pub fn as_mut_bytes(&mut self) -> &mut [u8] {
        &mut self.0
    }

    /// Consume into the encoded bytes.
    pub fn into_vec(self) -> Vec<u8> {
        self.0
    }
}

impl Serialize for MlKemCiphertext {
    fn from_bytes(bytes: &[u8]) -> ApiResult<Self> {
        Ok(Self(bytes.to_vec()))
    }

    fn to_bytes(&self) -> Vec<u8> {
        self.0.clone()
    }
}

/// The 32-byte shared secret.
#[derive(Clone, Zeroize, ZeroizeOnDrop, PartialEq)]
pub struct MlKemSharedSecret(SecretBytes<MLKEM_SS_BYTES>);

impl MlKemSharedSecret {
    pub(crate) fn new(inner: SecretBytes<MLKEM_SS_BYTES>) -> Self {
        Self(inner)
    }

    /// The secret bytes. Feed into a KDF immediately; do not store.
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_ref()
    }
}

impl core::fmt::Debug for MlKemSharedSecret {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("MlKemSharedSecret([REDACTED])")
    }
}

impl SerializeSecret for MlKemSharedSecret {
    fn from_bytes(bytes: &[u8]) -> ApiResult<Self> {
        Ok(Self(SecretBytes::from_slice(bytes)?))
    }

    fn to_bytes_zeroizing(&self) -> Zeroizing<Vec<u8>> {
        Zeroizing::new(self.0.as_ref().to_vec())
    }
}

/// Generic ML-KEM instance over a parameter set.
pub struct MlKemKem<P: MlKemParams> {
    _params: PhantomData<P>,
}

impl<P: MlKemParams> KemTrait for MlKemKem<P> {
    type PublicKey = MlKemPublicKey;
    type SecretKey = MlKemSecretKey;
    type SharedSecret = MlKemSharedSecret;
    type Ciphertext = MlKemCiphertext;
    type KeyPair = (Self::PublicKey, Self::SecretKey);

    fn name() -> &'static str {
        P::NAME
    }

    fn keypair<R: RngCore + CryptoRng>(rng: &mut R) -> ApiResult<Self::KeyPair> {
        let (ek, dk) = kem_keygen::<P, R>(rng)?;
        Ok((MlKemPublicKey::new(ek), MlKemSecretKey::new(dk)))
    }

    fn public_key(keypair: &Self::KeyPair) -> Self::PublicKey {
        keypair.0.clone()
    }

    fn secret_key(keypair: &Self::KeyPair) -> Self::SecretKey {
        keypair.1.clone()
    }

    fn encapsulate<R: RngCore + CryptoRng>(
        rng: &mut R,
        public_key: &Self::PublicKey,
    ) -> ApiResult<(Self::Ciphertext, Self::SharedSecret)> {
        let (ct, ss) = kem_encaps::<P, R>(public_key.as_bytes(), rng)?;
        Ok((MlKemCiphertext::new(ct), MlKemSharedSecret::new(ss)))
    }

    fn decapsulate(
        secret_key: &Self::SecretKey,
        ciphertext: &Self::Ciphertext,
    ) -> ApiResult<Self::SharedSecret> {
        let ss = kem_decaps::<P>(secret_key.as_bytes(), ciphertext.as_bytes())?;
        Ok(MlKemSharedSecret::new(ss))
    }
}
