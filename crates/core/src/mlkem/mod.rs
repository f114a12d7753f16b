//! ML-KEM (module-lattice key encapsulation mechanism)
//!
//! Layering inside this module:
//! * `params` — the compile-time parameter sets;
//! * `polyvec` — rank-k vectors of ring elements;
//! * `cpa` — the CPA-secure public-key encryption core (K-PKE);
//! * `serialize` — byte layouts for keys and ciphertexts;
//! * `ind_cca` — the Fujisaki-Okamoto transform with implicit rejection;
//! * `kem` — typed keys and the `Kem` trait implementation;
//! * `dynamic` — the runtime level dispatcher.

mod cpa;
mod ind_cca;
mod kem;
mod params;
mod polyvec;
mod serialize;

mod dynamic;
mod mlkem1024;
mod mlkem512;
mod mlkem768;

pub use self::dynamic::{MlKem, SecurityLevel};
pub use self::kem::{
    MlKemCiphertext, MlKemKem, MlKemPublicKey, MlKemSecretKey, MlKemSharedSecret,
};
pub use self::mlkem1024::MlKem1024;
pub use self::mlkem512::MlKem512;
pub use self::mlkem768::MlKem768;

pub use self::params::{MlKem1024Params, MlKem512Params, MlKem768Params, MlKemParams};

// Deterministic entry points, exposed for known-answer testing and for
// callers that manage their own seed storage.
pub use self::ind_cca::{encaps_derand, keygen_derand};

#[cfg(test)]
mod kats;
