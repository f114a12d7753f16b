//! Deterministic samplers over the ring
//!
//! Two distributions feed the scheme: uniform coefficients for the
//! public matrix (rejection sampling on an XOF stream, inputs public,
//! variable time allowed) and the centered binomial distribution for
//! secrets and noise (fixed input length, constant time in the bits).

use mlkem_internal::endian::{u24_from_le_bytes, u32_from_le_bytes};

use crate::error::{validate, Result};
use crate::poly::field::{N, Q};
use crate::poly::ring::{Normal, NttForm, Poly};
use crate::xof::{ExtendableOutputFunction, Shake128Xof};

/// Bytes of PRF output consumed per coefficient block by CBD_η.
pub const CBD_BYTES_PER_ETA: usize = 64;

/// Uniform rejection sampling of an NTT-form ring element from an XOF
/// stream (the matrix entries are defined directly in the NTT domain).
///
/// Reads 3 bytes at a time, splits them into two 12-bit candidates and
/// accepts those below q. The output and the number of squeezed bytes
/// are a deterministic function of the absorbed seed.
pub fn sample_uniform(xof: &mut Shake128Xof) -> Result<Poly<NttForm>> {
    let mut coeffs = [0i16; N];
    let mut count = 0usize;
    let mut buf = [0u8; 3];

    while count < N {
        xof.squeeze(&mut buf)?;

        let d1 = (buf[0] as u16) | ((buf[1] as u16 & 0x0F) << 8);
        let d2 = ((buf[1] as u16) >> 4) | ((buf[2] as u16) << 4);

        if d1 < Q as u16 {
            coeffs[count] = d1 as i16;
            count += 1;
        }
        if d2 < Q as u16 && count < N {
            coeffs[count] = d2 as i16;
            count += 1;
        }
    }

    Ok(Poly::from_raw(coeffs))
}

/// Centered binomial sampling CBD_η for η ∈ {2, 3}.
///
/// `buf` must hold exactly 64·η bytes of PRF output. Each coefficient is
/// Σaᵢ − Σbᵢ over η bits each, landing in [-η, η]; values are kept as
/// signed representatives. The bit extraction is word-parallel and
/// touches every input bit exactly once, independent of its value.
pub fn sample_cbd(buf: &[u8], eta: u8) -> Result<Poly<Normal>> {
    validate::parameter(eta == 2 || eta == 3, "eta", "CBD width must be 2 or 3")?;
    validate::length(
        "CBD input",
        buf.len(),
        CBD_BYTES_PER_ETA * eta as usize,
    )?;

    let poly = match eta {
        2 => cbd2(buf),
        _ => cbd3(buf),
    };
    Ok(poly)
}

fn cbd2(buf: &[u8]) -> Poly<Normal> {
    let mut coeffs = [0i16; N];
    for i in 0..N / 8 {
        let t = u32_from_le_bytes(&buf[4 * i..]);
        let d = (t & 0x5555_5555) + ((t >> 1) & 0x5555_5555);

        for j in 0..8 {
            let a = ((d >> (4 * j)) & 0x3) as i16;
            let b = ((d >> (4 * j + 2)) & 0x3) as i16;
            coeffs[8 * i + j] = a - b;
        }
    }
    Poly::from_raw(coeffs)
}

fn cbd3(buf: &[u8]) -> Poly<Normal> {
    let mut coeffs = [0i16; N];
    for i in 0..N / 4 {
        let t = u24_from_le_bytes(&buf[3 * i..]);
        let d = (t & 0x0024_9249) + ((t >> 1) & 0x0024_9249) + ((t >> 2) & 0x0024_9249);

        for j in 0..4 {
            let a = ((d >> (6 * j)) & 0x7) as i16;
            let b = ((d >> (6 * j + 3)) & 0x7) as i16;
            coeffs[4 * i + j] = a - b;
        }
    }
    Poly::from_raw(coeffs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::xof::Shake256Xof;

    fn primed_xof(seed: &[u8]) -> Shake128Xof {
        let mut xof = Shake128Xof::new();
        xof.update(seed).unwrap();
        xof
    }

    #[test]
    fn uniform_output_is_in_range_and_deterministic() {
        let a = sample_uniform(&mut primed_xof(b"seed-0")).unwrap();
        let b = sample_uniform(&mut primed_xof(b"seed-0")).unwrap();
        let c = sample_uniform(&mut primed_xof(b"seed-1")).unwrap();

        assert!(a.as_coeffs().iter().all(|&x| (0..Q).contains(&x)));
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn cbd_rejects_bad_parameters() {
        assert!(sample_cbd(&[0u8; 128], 2).is_ok());
        assert!(sample_cbd(&[0u8; 192], 3).is_ok());
        assert!(sample_cbd(&[0u8; 128], 3).is_err());
        assert!(sample_cbd(&[0u8; 128], 4).is_err());
    }

    #[test]
    fn cbd_range_matches_eta() {
        for eta in [2u8, 3] {
            let buf =
                Shake256Xof::generate(&[eta], CBD_BYTES_PER_ETA * eta as usize).unwrap();
            let poly = sample_cbd(&buf, eta).unwrap();
            let bound = eta as i16;
            assert!(poly
                .as_coeffs()
                .iter()
                .all(|&c| (-bound..=bound).contains(&c)));
        }
    }

    #[test]
    fn cbd_all_zero_input_gives_zero_poly() {
        let poly = sample_cbd(&[0u8; 128], 2).unwrap();
        assert!(poly.as_coeffs().iter().all(|&c| c == 0));
    }

    #[test]
    fn cbd2_distribution_is_roughly_binomial() {
        // CBD(2): P(-2..2) = 1/16, 4/16, 6/16, 4/16, 1/16. Loose
        // chi-squared bound over a few thousand samples.
        let buf = Shake256Xof::generate(b"cbd-histogram", 128 * 40).unwrap();
        let mut histogram = [0u32; 5];
        for chunk in buf.chunks_exact(128) {
            let poly = sample_cbd(chunk, 2).unwrap();
            for &c in poly.as_coeffs() {
                histogram[(c + 2) as usize] += 1;
            }
        }

        let total: u32 = histogram.iter().sum();
        let expected = [1.0, 4.0, 6.0, 4.0, 1.0].map(|w| w / 16.0 * total as f64);
        let chi2: f64 = histogram
            .iter()
            .zip(expected.iter())
            .map(|(&o, &e)| (o as f64 - e).powi(2) / e)
            .sum();
        // 4 degrees of freedom; 18.5 is the 0.001 quantile.
        assert!(chi2 < 18.5, "chi-squared {}", chi2);
    }
}
