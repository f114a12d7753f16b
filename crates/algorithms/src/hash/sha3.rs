//! SHA-3 fixed-output hash functions (FIPS PUB 202)

use mlkem_params::utils::hash::{
    SHA3_256_OUTPUT_SIZE, SHA3_256_RATE, SHA3_512_OUTPUT_SIZE, SHA3_512_RATE,
};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::{Error, Result};
use crate::hash::HashFunction;
use crate::keccak::{Sponge, DOMAIN_SHA3};

macro_rules! sha3_impl {
    ($name:ident, $doc:literal, $algo:literal, $rate:expr, $output:expr) => {
        #[doc = $doc]
        #[derive(Clone, Zeroize, ZeroizeOnDrop)]
        pub struct $name {
            sponge: Sponge<{ $rate }>,
            finalized: bool,
        }

        impl Default for $name {
            fn default() -> Self {
                <Self as HashFunction>::new()
            }
        }

        impl HashFunction for $name {
            const OUTPUT_SIZE: usize = $output;
            type Output = [u8; $output];

            fn name() -> &'static str {
                $algo
            }

            fn new() -> Self {
                Self {
                    sponge: Sponge::new(),
                    finalized: false,
                }
            }

            fn update(&mut self, data: &[u8]) -> Result<()> {
                if self.finalized {
                    return Err(Error::Processing {
                        operation: $algo,
                        details: "update after finalize",
                    });
                }
                self.sponge.absorb(data);
                Ok(())
            }

            fn finalize(&mut self) -> Result<Self::Output> {
                if self.finalized {
                    return Err(Error::Processing {
                        operation: $algo,
                        details: "finalize called twice",
                    });
                }
                self.finalized = true;
                self.sponge.pad(DOMAIN_SHA3);

                let mut digest = [0u8; $output];
                self.sponge.squeeze(&mut digest);
                Ok(digest)
            }
        }
    };
}

sha3_impl!(
    Sha3_256,
    "SHA3-256 with a 32-byte digest.",
    "SHA3-256",
    SHA3_256_RATE,
    SHA3_256_OUTPUT_SIZE
);

sha3_impl!(
    Sha3_512,
    "SHA3-512 with a 64-byte digest.",
    "SHA3-512",
    SHA3_512_RATE,
    SHA3_512_OUTPUT_SIZE
);
