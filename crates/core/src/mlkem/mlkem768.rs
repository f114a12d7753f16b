//! ML-KEM-768 (NIST security category 3).

use super::kem::MlKemKem;
use super::params::MlKem768Params;

/// ML-KEM-768, implementing `mlkem_api::Kem`.
pub type MlKem768 = MlKemKem<MlKem768Params>;
