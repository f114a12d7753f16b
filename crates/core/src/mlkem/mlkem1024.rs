//! ML-KEM-1024 (NIST security category 5).

use super::kem::MlKemKem;
use super::params::MlKem1024Params;

/// ML-KEM-1024, implementing `mlkem_api::Kem`.
pub type MlKem1024 = MlKemKem<MlKem1024Params>;
