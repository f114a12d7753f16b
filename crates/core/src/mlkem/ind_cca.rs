//! The Fujisaki-Okamoto transform with implicit rejection
//!
//! Wraps K-PKE into an IND-CCA2 KEM. Decapsulation re-encrypts the
//! recovered message and selects, in constant time, between the real
//! key K′ and the rejection key J(z ‖ c); an adversarial ciphertext
//! therefore yields a pseudorandom key instead of an observable error.

use mlkem_algorithms::hash::{HashFunction, Sha3_256, Sha3_512};
use mlkem_algorithms::xof::{ExtendableOutputFunction, Shake256Xof};
use mlkem_api::{Error as ApiError, Result as ApiResult, SecretBytes};
use mlkem_common::SecretBuffer;
use mlkem_internal::constant_time::{ct_assign, ct_eq_choice};
use rand::{CryptoRng, RngCore};
use zeroize::{Zeroize, Zeroizing};

use super::cpa::{decrypt_cpa, encrypt_cpa, keygen_cpa};
use super::params::{MlKemParams, MLKEM_SEED_BYTES, MLKEM_SS_BYTES};
use super::serialize::{
    pack_ciphertext, pack_pk, pack_sk, polyvec_packed_bytes, unpack_ciphertext, unpack_pk,
    unpack_sk,
};

/// H(x) = SHA3-256(x).
fn h_func(data: &[u8]) -> ApiResult<[u8; MLKEM_SS_BYTES]> {
    Ok(Sha3_256::digest(data)?)
}

/// G(x) = SHA3-512(x), split into two 32-byte halves.
fn g_func(data: &[u8]) -> ApiResult<([u8; MLKEM_SS_BYTES], [u8; MLKEM_SS_BYTES])> {
    let digest = Zeroizing::new(Sha3_512::digest(data)?);
    let mut k = [0u8; MLKEM_SS_BYTES];
    let mut r = [0u8; MLKEM_SS_BYTES];
    k.copy_from_slice(&digest[..MLKEM_SS_BYTES]);
    r.copy_from_slice(&digest[MLKEM_SS_BYTES..]);
    Ok((k, r))
}

/// J(z ‖ c) = SHAKE-256(z ‖ c, 32), the implicit-rejection key.
fn j_func(z: &[u8], ct: &[u8]) -> ApiResult<[u8; MLKEM_SS_BYTES]> {
    let mut xof = Shake256Xof::new();
    xof.update(z)?;
    xof.update(ct)?;
    let mut out = [0u8; MLKEM_SS_BYTES];
    xof.squeeze(&mut out)?;
    Ok(out)
}

/// Deterministic key generation from the seeds (d, z).
///
/// Returns (encapsulation key, decapsulation key) as byte blobs. The
/// decapsulation key embeds the encoded public key, H(ek) and z.
pub fn keygen_derand<P: MlKemParams>(
    d: &[u8; MLKEM_SEED_BYTES],
    z: &[u8; MLKEM_SEED_BYTES],
) -> ApiResult<(Vec<u8>, Vec<u8>)> {
    let (pk_cpa, mut sk_cpa) = keygen_cpa::<P>(d)?;

    let ek_bytes = pack_pk::<P>(&pk_cpa);
    let sk_cpa_bytes = Zeroizing::new(pack_sk::<P>(&sk_cpa));
    sk_cpa.zeroize();

    let h_ek = h_func(&ek_bytes)?;

    let mut dk_bytes = Vec::with_capacity(P::SECRET_KEY_BYTES);
    dk_bytes.extend_from_slice(&sk_cpa_bytes);
    dk_bytes.extend_from_slice(&ek_bytes);
    dk_bytes.extend_from_slice(&h_ek);
    dk_bytes.extend_from_slice(z);

    Ok((ek_bytes, dk_bytes))
}

/// Key generation: draws d and z from the RNG, then proceeds
/// deterministically.
pub(crate) fn kem_keygen<P: MlKemParams, R: RngCore + CryptoRng>(
    rng: &mut R,
) -> ApiResult<(Vec<u8>, Vec<u8>)> {
    let mut seeds = Zeroizing::new([0u8; 2 * MLKEM_SEED_BYTES]);
    rng.try_fill_bytes(&mut *seeds)
        .map_err(|_| ApiError::EntropyFailure { context: "keygen" })?;

    let mut d = Zeroizing::new([0u8; MLKEM_SEED_BYTES]);
    let mut z = Zeroizing::new([0u8; MLKEM_SEED_BYTES]);
    d.copy_from_slice(&seeds[..MLKEM_SEED_BYTES]);
    z.copy_from_slice(&seeds[MLKEM_SEED_BYTES..]);

    keygen_derand::<P>(&d, &z)
}

/// Deterministic encapsulation of the message m to the given key.
///
/// (K, r) := G(m ‖ H(ek)); c := Enc′(ek, m, r); the shared secret is K.
pub fn encaps_derand<P: MlKemParams>(
    ek_bytes: &[u8],
    m: &[u8; MLKEM_SEED_BYTES],
) -> ApiResult<(Vec<u8>, SecretBytes<MLKEM_SS_BYTES>)> {
    // Rejects wrong lengths and out-of-range t̂ coefficients before any
    // secret-dependent work.
    let pk_cpa = unpack_pk::<P>(ek_bytes)?;

    let h_ek = h_func(ek_bytes)?;

    let mut g_input = SecretBuffer::<{ 2 * MLKEM_SEED_BYTES }>::zeroed();
    g_input.as_mut_slice()[..MLKEM_SEED_BYTES].copy_from_slice(m);
    g_input.as_mut_slice()[MLKEM_SEED_BYTES..].copy_from_slice(&h_ek);
    let (k, mut r) = g_func(g_input.as_slice())?;

    let ct_cpa = encrypt_cpa::<P>(&pk_cpa, m, &r)?;
    let ct_bytes = pack_ciphertext::<P>(&ct_cpa)?;

    r.zeroize();

    Ok((ct_bytes, SecretBytes::new(k)))
}

/// Encapsulation: draws the 32-byte message from the RNG, then proceeds
/// deterministically.
pub(crate) fn kem_encaps<P: MlKemParams, R: RngCore + CryptoRng>(
    ek_bytes: &[u8],
    rng: &mut R,
) -> ApiResult<(Vec<u8>, SecretBytes<MLKEM_SS_BYTES>)> {
    let mut m = Zeroizing::new([0u8; MLKEM_SEED_BYTES]);
    rng.try_fill_bytes(&mut *m)
        .map_err(|_| ApiError::EntropyFailure { context: "encaps" })?;

    encaps_derand::<P>(ek_bytes, &m)
}

/// Decapsulation with implicit rejection.
///
/// Always returns 32 bytes for well-formed inputs of the right length;
/// a ciphertext that fails the re-encryption check yields J(z ‖ c).
pub(crate) fn kem_decaps<P: MlKemParams>(
    dk_bytes: &[u8],
    ct_bytes: &[u8],
) -> ApiResult<SecretBytes<MLKEM_SS_BYTES>> {
    // Both length checks come before any secret material is touched.
    if dk_bytes.len() != P::SECRET_KEY_BYTES {
        return Err(ApiError::InvalidLength {
            context: "secret key",
            expected: P::SECRET_KEY_BYTES,
            actual: dk_bytes.len(),
        });
    }
    if ct_bytes.len() != P::CIPHERTEXT_BYTES {
        return Err(ApiError::InvalidLength {
            context: "ciphertext",
            expected: P::CIPHERTEXT_BYTES,
            actual: ct_bytes.len(),
        });
    }

    // dk = ŝ ‖ ek ‖ H(ek) ‖ z
    let sk_cpa_len = polyvec_packed_bytes::<P>();
    let ek_end = sk_cpa_len + P::PUBLIC_KEY_BYTES;
    let h_end = ek_end + MLKEM_SS_BYTES;

    let sk_cpa_bytes = &dk_bytes[..sk_cpa_len];
    let ek_bytes = &dk_bytes[sk_cpa_len..ek_end];
    let h_ek = &dk_bytes[ek_end..h_end];
    let z = &dk_bytes[h_end..];

    let mut sk_cpa = unpack_sk::<P>(sk_cpa_bytes)?;
    let pk_cpa = unpack_pk::<P>(ek_bytes)?;
    let ct_cpa = unpack_ciphertext::<P>(ct_bytes)?;

    // m′ := Dec′(ŝ, c); (K′, r′) := G(m′ ‖ H(ek))
    let m_prime = decrypt_cpa::<P>(&sk_cpa, &ct_cpa)?;
    sk_cpa.zeroize();

    let mut g_input = SecretBuffer::<{ 2 * MLKEM_SEED_BYTES }>::zeroed();
    g_input.as_mut_slice()[..MLKEM_SEED_BYTES].copy_from_slice(m_prime.as_ref());
    g_input.as_mut_slice()[MLKEM_SEED_BYTES..].copy_from_slice(h_ek);
    let (mut k_prime, mut r_prime) = g_func(g_input.as_slice())?;

    // K̄ := J(z ‖ c), computed unconditionally.
    let k_bar = j_func(z, ct_bytes)?;

    // Re-encrypt and compare in constant time.
    let ct_prime_cpa = encrypt_cpa::<P>(&pk_cpa, &m_prime, &r_prime)?;
    let ct_prime_bytes = pack_ciphertext::<P>(&ct_prime_cpa)?;
    let accept = ct_eq_choice(ct_bytes, &ct_prime_bytes);

    // Start from the rejection key and overwrite when the check passed.
    let mut key = k_bar;
    ct_assign(&mut key, &k_prime, accept);

    k_prime.zeroize();
    r_prime.zeroize();

    Ok(SecretBytes::new(key))
}
