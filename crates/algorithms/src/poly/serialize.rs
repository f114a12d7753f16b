//! Bit-packing codecs and lossy compression for ring elements
//!
//! `byte_encode_12` / `byte_decode_12` carry full coefficients (public
//! keys and secret keys); the compress/decompress pair implements the
//! d-bit rounding used by ciphertexts and the 1-bit message encoding.
//! All rounding is plain unsigned integer arithmetic.

use crate::error::{validate, Error, Result};
use crate::poly::field::{caddq, N, Q};
use crate::poly::ring::{Form, Normal, Poly};

/// Bytes produced by the 12-bit coefficient packing of one element.
pub const POLY_PACKED_BYTES: usize = N * 12 / 8;

/// Bytes produced by `compress_poly` at depth d.
pub const fn compressed_bytes(d: usize) -> usize {
    N * d / 8
}

/// Round a canonical coefficient to d bits: ⌈x·2^d/q⌋ mod 2^d.
#[inline(always)]
fn compress_coeff(x: i16, d: usize) -> u16 {
    let x = caddq(x) as u32;
    let rounded = ((x << d) + (Q as u32) / 2) / (Q as u32);
    (rounded & ((1 << d) - 1)) as u16
}

/// Expand a d-bit value back to a coefficient: ⌊y·q/2^d + 1/2⌋.
#[inline(always)]
fn decompress_coeff(y: u32, d: usize) -> i16 {
    ((y * (Q as u32) + (1 << (d - 1))) >> d) as i16
}

/// Pack an element's coefficients at 12 bits each, two coefficients per
/// three bytes, little-endian. Coefficients are lifted to [0, q) first.
pub fn byte_encode_12<F: Form>(poly: &Poly<F>) -> Vec<u8> {
    let mut out = Vec::with_capacity(POLY_PACKED_BYTES);

    for pair in poly.as_coeffs().chunks_exact(2) {
        let c0 = caddq(pair[0]) as u16;
        let c1 = caddq(pair[1]) as u16;
        out.push((c0 & 0xFF) as u8);
        out.push((((c0 >> 8) & 0x0F) | ((c1 & 0x0F) << 4)) as u8);
        out.push((c1 >> 4) as u8);
    }

    out
}

/// Unpack 12-bit coefficients.
///
/// Rejects any coefficient ≥ q: full-width encodings (public-key t̂,
/// decapsulation-key ŝ) admit no rejection sampling, so an out-of-range
/// value is a malformed input, not a resample.
pub fn byte_decode_12<F: Form>(bytes: &[u8], context: &'static str) -> Result<Poly<F>> {
    validate::length(context, bytes.len(), POLY_PACKED_BYTES)?;

    let mut coeffs = [0i16; N];
    for (i, triple) in bytes.chunks_exact(3).enumerate() {
        let d1 = (triple[0] as u16) | ((triple[1] as u16 & 0x0F) << 8);
        let d2 = ((triple[1] as u16) >> 4) | ((triple[2] as u16) << 4);

        if d1 >= Q as u16 || d2 >= Q as u16 {
            return Err(Error::Encoding { context });
        }

        coeffs[2 * i] = d1 as i16;
        coeffs[2 * i + 1] = d2 as i16;
    }

    Ok(Poly::from_raw(coeffs))
}

/// Compress an element to d bits per coefficient and pack the result.
/// Supported depths are those the scheme uses: 1 (message), 4/5 (the v
/// component), 10/11 (the u component).
pub fn compress_poly(poly: &Poly<Normal>, d: usize) -> Result<Vec<u8>> {
    let coeffs = poly.as_coeffs();
    let mut out = Vec::with_capacity(compressed_bytes(d));

    match d {
        1 => {
            for chunk in coeffs.chunks_exact(8) {
                let mut byte = 0u8;
                for (j, &c) in chunk.iter().enumerate() {
                    byte |= (compress_coeff(c, 1) as u8) << j;
                }
                out.push(byte);
            }
        }
        4 => {
            for chunk in coeffs.chunks_exact(2) {
                let t0 = compress_coeff(chunk[0], 4) as u8;
                let t1 = compress_coeff(chunk[1], 4) as u8;
                out.push(t0 | (t1 << 4));
            }
        }
        5 => {
            for chunk in coeffs.chunks_exact(8) {
                let mut t = [0u8; 8];
                for (j, &c) in chunk.iter().enumerate() {
                    t[j] = compress_coeff(c, 5) as u8;
                }
                out.push(t[0] | (t[1] << 5));
                out.push((t[1] >> 3) | (t[2] << 2) | (t[3] << 7));
                out.push((t[3] >> 1) | (t[4] << 4));
                out.push((t[4] >> 4) | (t[5] << 1) | (t[6] << 6));
                out.push((t[6] >> 2) | (t[7] << 3));
            }
        }
        10 => {
            for chunk in coeffs.chunks_exact(4) {
                let mut t = [0u16; 4];
                for (j, &c) in chunk.iter().enumerate() {
                    t[j] = compress_coeff(c, 10);
                }
                out.push(t[0] as u8);
                out.push(((t[0] >> 8) | (t[1] << 2)) as u8);
                out.push(((t[1] >> 6) | (t[2] << 4)) as u8);
                out.push(((t[2] >> 4) | (t[3] << 6)) as u8);
                out.push((t[3] >> 2) as u8);
            }
        }
        11 => {
            for chunk in coeffs.chunks_exact(8) {
                let mut t = [0u16; 8];
                for (j, &c) in chunk.iter().enumerate() {
                    t[j] = compress_coeff(c, 11);
                }
                out.push(t[0] as u8);
                out.push(((t[0] >> 8) | (t[1] << 3)) as u8);
                out.push(((t[1] >> 5) | (t[2] << 6)) as u8);
                out.push((t[2] >> 2) as u8);
                out.push(((t[2] >> 10) | (t[3] << 1)) as u8);
                out.push(((t[3] >> 7) | (t[4] << 4)) as u8);
                out.push(((t[4] >> 4) | (t[5] << 7)) as u8);
                out.push((t[5] >> 1) as u8);
                out.push(((t[5] >> 9) | (t[6] << 2)) as u8);
                out.push(((t[6] >> 6) | (t[7] << 5)) as u8);
                out.push((t[7] >> 3) as u8);
            }
        }
        _ => {
            return Err(Error::Parameter {
                name: "d",
                reason: "unsupported compression depth",
            })
        }
    }

    Ok(out)
}

/// Inverse of `compress_poly`. Every d-bit pattern is a valid input, so
/// this never rejects beyond the length check.
pub fn decompress_poly(data: &[u8], d: usize) -> Result<Poly<Normal>> {
    validate::length("compressed element", data.len(), compressed_bytes(d))?;

    let mut coeffs = [0i16; N];
    let mut idx = 0usize;

    match d {
        1 => {
            for &byte in data {
                for j in 0..8 {
                    coeffs[idx] = decompress_coeff(((byte >> j) & 1) as u32, 1);
                    idx += 1;
                }
            }
        }
        4 => {
            for &byte in data {
                coeffs[idx] = decompress_coeff((byte & 0x0F) as u32, 4);
                coeffs[idx + 1] = decompress_coeff((byte >> 4) as u32, 4);
                idx += 2;
            }
        }
        5 => {
            for b in data.chunks_exact(5) {
                let t = [
                    (b[0] & 0x1F) as u32,
                    ((b[0] >> 5) | ((b[1] & 0x03) << 3)) as u32,
                    ((b[1] >> 2) & 0x1F) as u32,
                    ((b[1] >> 7) | ((b[2] & 0x0F) << 1)) as u32,
                    ((b[2] >> 4) | ((b[3] & 0x01) << 4)) as u32,
                    ((b[3] >> 1) & 0x1F) as u32,
                    ((b[3] >> 6) | ((b[4] & 0x07) << 2)) as u32,
                    (b[4] >> 3) as u32,
                ];
                for &v in t.iter() {
                    coeffs[idx] = decompress_coeff(v, 5);
                    idx += 1;
                }
            }
        }
        10 => {
            for b in data.chunks_exact(5) {
                let t = [
                    (b[0] as u32) | ((b[1] as u32 & 0x03) << 8),
                    ((b[1] as u32) >> 2) | ((b[2] as u32 & 0x0F) << 6),
                    ((b[2] as u32) >> 4) | ((b[3] as u32 & 0x3F) << 4),
                    ((b[3] as u32) >> 6) | ((b[4] as u32) << 2),
                ];
                for &v in t.iter() {
                    coeffs[idx] = decompress_coeff(v, 10);
                    idx += 1;
                }
            }
        }
        11 => {
            for b in data.chunks_exact(11) {
                let t = [
                    (b[0] as u32) | ((b[1] as u32 & 0x07) << 8),
                    ((b[1] as u32) >> 3) | ((b[2] as u32 & 0x3F) << 5),
                    ((b[2] as u32) >> 6) | ((b[3] as u32) << 2) | ((b[4] as u32 & 0x01) << 10),
                    ((b[4] as u32) >> 1) | ((b[5] as u32 & 0x0F) << 7),
                    ((b[5] as u32) >> 4) | ((b[6] as u32 & 0x7F) << 4),
                    ((b[6] as u32) >> 7) | ((b[7] as u32) << 1) | ((b[8] as u32 & 0x03) << 9),
                    ((b[8] as u32) >> 2) | ((b[9] as u32 & 0x1F) << 6),
                    ((b[9] as u32) >> 5) | ((b[10] as u32) << 3),
                ];
                for &v in t.iter() {
                    coeffs[idx] = decompress_coeff(v, 11);
                    idx += 1;
                }
            }
        }
        _ => {
            return Err(Error::Parameter {
                name: "d",
                reason: "unsupported compression depth",
            })
        }
    }

    Ok(Poly::from_raw(coeffs))
}
