//! Output and rate constants for the FIPS 202 primitives used here.

/// SHA3-256 output size in bytes (the scheme's H).
pub const SHA3_256_OUTPUT_SIZE: usize = 32;

/// SHA3-512 output size in bytes (the scheme's G).
pub const SHA3_512_OUTPUT_SIZE: usize = 64;

/// SHA3-256 sponge rate in bytes.
pub const SHA3_256_RATE: usize = 136;

/// SHA3-512 sponge rate in bytes.
pub const SHA3_512_RATE: usize = 72;

/// SHAKE-128 sponge rate in bytes.
pub const SHAKE128_RATE: usize = 168;

/// SHAKE-256 sponge rate in bytes.
pub const SHAKE256_RATE: usize = 136;
