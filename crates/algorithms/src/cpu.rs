//! CPU capability detection
//!
//! The one piece of process-wide state in the workspace: a read-only
//! feature descriptor populated on first use. KEM instances consult it
//! when choosing their NTT kernel; after initialization all reads are
//! lock-free.

use std::sync::OnceLock;

/// Instruction-set extensions relevant to the vectorized kernels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CpuFeatures {
    /// AVX2 available (x86-64).
    pub avx2: bool,
    /// NEON available (aarch64; baseline on that architecture).
    pub neon: bool,
}

static FEATURES: OnceLock<CpuFeatures> = OnceLock::new();

/// The cached capability descriptor for this process.
pub fn features() -> &'static CpuFeatures {
    FEATURES.get_or_init(detect)
}

#[cfg(target_arch = "x86_64")]
fn detect() -> CpuFeatures {
    CpuFeatures {
        avx2: std::arch::is_x86_feature_detected!("avx2"),
        neon: false,
    }
}

#[cfg(target_arch = "aarch64")]
fn detect() -> CpuFeatures {
    CpuFeatures {
        avx2: false,
        neon: true,
    }
}

#[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
fn detect() -> CpuFeatures {
    CpuFeatures {
        avx2: false,
        neon: false,
    }
}
