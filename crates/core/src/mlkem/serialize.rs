//! Byte layouts for keys and ciphertexts
//!
//! Plain concatenations, no framing or versioning:
//! * encapsulation key: byteEncode₁₂(t̂₀) ‖ … ‖ byteEncode₁₂(t̂ₖ₋₁) ‖ ρ
//! * decapsulation key: byteEncode₁₂(ŝ) ‖ ek ‖ H(ek) ‖ z
//! * ciphertext: compressed u components, then compressed v
//!
//! Every decoder validates the exact byte size first; the 12-bit
//! decoders additionally reject out-of-range coefficients.

use mlkem_algorithms::error::{validate, Result as AlgoResult};
use mlkem_algorithms::poly::serialize::{
    byte_decode_12, byte_encode_12, compress_poly, compressed_bytes, decompress_poly,
    POLY_PACKED_BYTES,
};

use super::cpa::{CpaCiphertext, CpaPublicKey, CpaSecretKey};
use super::params::{MlKemParams, MLKEM_SEED_BYTES};
use super::polyvec::PolyVec;

/// Packed size of a rank-k vector at 12 bits per coefficient.
pub(crate) fn polyvec_packed_bytes<P: MlKemParams>() -> usize {
    P::K * POLY_PACKED_BYTES
}

/// Serialize the inner public key.
pub(crate) fn pack_pk<P: MlKemParams>(pk: &CpaPublicKey<P>) -> Vec<u8> {
    let (t_hat, rho) = pk;
    let mut out = Vec::with_capacity(P::PUBLIC_KEY_BYTES);

    for poly in t_hat.polys.iter() {
        out.extend(byte_encode_12(poly));
    }
    out.extend_from_slice(rho);

    out
}

/// Deserialize and validate the inner public key.
pub(crate) fn unpack_pk<P: MlKemParams>(bytes: &[u8]) -> AlgoResult<CpaPublicKey<P>> {
    validate::length("public key", bytes.len(), P::PUBLIC_KEY_BYTES)?;

    let mut t_hat = PolyVec::zero();
    for (i, chunk) in bytes[..polyvec_packed_bytes::<P>()]
        .chunks_exact(POLY_PACKED_BYTES)
        .enumerate()
    {
        t_hat.polys[i] = byte_decode_12(chunk, "public key")?;
    }

    let mut rho = [0u8; MLKEM_SEED_BYTES];
    rho.copy_from_slice(&bytes[polyvec_packed_bytes::<P>()..]);

    Ok((t_hat, rho))
}

/// Serialize the inner secret key (ŝ only; the FO layer appends the
/// rest of the decapsulation key).
pub(crate) fn pack_sk<P: MlKemParams>(sk: &CpaSecretKey<P>) -> Vec<u8> {
    let mut out = Vec::with_capacity(polyvec_packed_bytes::<P>());
    for poly in sk.polys.iter() {
        out.extend(byte_encode_12(poly));
    }
    out
}

/// Deserialize and validate the inner secret key.
pub(crate) fn unpack_sk<P: MlKemParams>(bytes: &[u8]) -> AlgoResult<CpaSecretKey<P>> {
    validate::length("secret key", bytes.len(), polyvec_packed_bytes::<P>())?;

    let mut s_hat = PolyVec::zero();
    for (i, chunk) in bytes.chunks_exact(POLY_PACKED_BYTES).enumerate() {
        s_hat.polys[i] = byte_decode_12(chunk, "secret key")?;
    }
    Ok(s_hat)
}

/// Compress and serialize a ciphertext.
pub(crate) fn pack_ciphertext<P: MlKemParams>(ct: &CpaCiphertext<P>) -> AlgoResult<Vec<u8>> {
    let (u, v) = ct;
    let mut out = Vec::with_capacity(P::CIPHERTEXT_BYTES);

    for poly in u.polys.iter() {
        out.extend(compress_poly(poly, P::DU)?);
    }
    out.extend(compress_poly(v, P::DV)?);

    Ok(out)
}

/// Deserialize and decompress a ciphertext. Beyond the size check every
/// bit pattern is accepted; malformed contents surface only through
/// implicit rejection.
pub(crate) fn unpack_ciphertext<P: MlKemParams>(bytes: &[u8]) -> AlgoResult<CpaCiphertext<P>> {
    validate::length("ciphertext", bytes.len(), P::CIPHERTEXT_BYTES)?;

    let u_bytes = compressed_bytes(P::DU);
    let mut u = PolyVec::zero();
    for (i, chunk) in bytes[..P::K * u_bytes].chunks_exact(u_bytes).enumerate() {
        u.polys[i] = decompress_poly(chunk, P::DU)?;
    }

    let v = decompress_poly(&bytes[P::K * u_bytes..], P::DV)?;

    Ok((u, v))
}
