//! Error type definitions for KEM operations
//!
//! Every failure a caller can observe maps to one of the kinds below.
//! Errors are plain return values; no failure path panics, and
//! decapsulation never reports "decryption failed" at all (implicit
//! rejection handles that case by design of the FO transform).

use core::fmt;

/// Primary error type for KEM operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A parameter is outside its allowed range (e.g. an unknown
    /// security level).
    InvalidParameter {
        /// Where the parameter was rejected.
        context: &'static str,
    },

    /// An input byte blob does not have the fixed size required by the
    /// selected parameter set.
    InvalidLength {
        /// Which blob was rejected.
        context: &'static str,
        /// Expected length in bytes.
        expected: usize,
        /// Actual length in bytes.
        actual: usize,
    },

    /// A deserialized coefficient was out of range where no rejection
    /// sampling is allowed (public-key or decapsulation-key material).
    InvalidEncoding {
        /// Which structure failed to decode.
        context: &'static str,
    },

    /// The random number generator failed or returned short output.
    EntropyFailure {
        /// Which operation was starved of entropy.
        context: &'static str,
    },

    /// Internal invariant violation. Reaching this kind indicates a bug.
    Internal {
        /// Where the invariant was violated.
        context: &'static str,
    },
}

/// Result type for KEM operations.
pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidParameter { context } => {
                write!(f, "invalid parameter in {}", context)
            }
            Error::InvalidLength {
                context,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "invalid length for {}: expected {}, got {}",
                    context, expected, actual
                )
            }
            Error::InvalidEncoding { context } => {
                write!(f, "invalid encoding in {}", context)
            }
            Error::EntropyFailure { context } => {
                write!(f, "entropy source failure in {}", context)
            }
            Error::Internal { context } => {
                write!(f, "internal error in {}", context)
            }
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_context() {
        let err = Error::InvalidLength {
            context: "public key",
            expected: 800,
            actual: 799,
        };
        let msg = err.to_string();
        assert!(msg.contains("public key"));
        assert!(msg.contains("800"));
        assert!(msg.contains("799"));
    }

    #[test]
    fn kinds_are_comparable() {
        let a = Error::InvalidParameter { context: "level" };
        let b = Error::InvalidParameter { context: "level" };
        assert_eq!(a, b);
    }
}
