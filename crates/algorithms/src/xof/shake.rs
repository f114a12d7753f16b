//! SHAKE extendable output functions (FIPS PUB 202)

use mlkem_params::utils::hash::{SHAKE128_RATE, SHAKE256_RATE};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::{Error, Result};
use crate::keccak::{Sponge, DOMAIN_SHAKE};
use crate::xof::ExtendableOutputFunction;

macro_rules! shake_impl {
    ($name:ident, $doc:literal, $algo:literal, $rate:expr, $level:expr) => {
        #[doc = $doc]
        #[derive(Clone, Zeroize, ZeroizeOnDrop)]
        pub struct $name {
            sponge: Sponge<{ $rate }>,
            squeezing: bool,
        }

        impl Default for $name {
            fn default() -> Self {
                <Self as ExtendableOutputFunction>::new()
            }
        }

        impl ExtendableOutputFunction for $name {
            fn new() -> Self {
                Self {
                    sponge: Sponge::new(),
                    squeezing: false,
                }
            }

            fn update(&mut self, data: &[u8]) -> Result<()> {
                if self.squeezing {
                    return Err(Error::Processing {
                        operation: $algo,
                        details: "update after squeezing has begun",
                    });
                }
                self.sponge.absorb(data);
                Ok(())
            }

            fn squeeze(&mut self, output: &mut [u8]) -> Result<()> {
                if !self.squeezing {
                    self.sponge.pad(DOMAIN_SHAKE);
                    self.squeezing = true;
                }
                self.sponge.squeeze(output);
                Ok(())
            }

            fn squeeze_into_vec(&mut self, len: usize) -> Result<Vec<u8>> {
                let mut out = vec![0u8; len];
                self.squeeze(&mut out)?;
                Ok(out)
            }

            fn reset(&mut self) -> Result<()> {
                self.sponge.reset();
                self.squeezing = false;
                Ok(())
            }

            fn security_level() -> usize {
                $level
            }
        }
    };
}

shake_impl!(
    Shake128Xof,
    "SHAKE-128 XOF with arbitrary-length output.",
    "SHAKE-128",
    SHAKE128_RATE,
    128
);

shake_impl!(
    Shake256Xof,
    "SHAKE-256 XOF with arbitrary-length output.",
    "SHAKE-256",
    SHAKE256_RATE,
    256
);
