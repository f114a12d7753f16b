//! Error handling for the arithmetic and hashing primitives

use core::fmt;

use mlkem_api::Error as ApiError;

/// The error type for primitive operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Parameter validation error
    Parameter {
        /// Name of the invalid parameter
        name: &'static str,
        /// Reason why the parameter is invalid
        reason: &'static str,
    },

    /// Length validation error
    Length {
        /// Context where the length error occurred
        context: &'static str,
        /// Expected length in bytes
        expected: usize,
        /// Actual length in bytes
        actual: usize,
    },

    /// A decoded coefficient was outside [0, q) where rejection is not
    /// permitted
    Encoding {
        /// Structure that failed to decode
        context: &'static str,
    },

    /// Processing error during an operation (state machine misuse and
    /// other conditions that indicate a caller bug)
    Processing {
        /// Operation that failed
        operation: &'static str,
        /// Additional details about the failure
        details: &'static str,
    },
}

/// Result type for primitive operations.
pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Parameter { name, reason } => {
                write!(f, "invalid parameter '{}': {}", name, reason)
            }
            Error::Length {
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
            Error::Encoding { context } => {
                write!(f, "out-of-range coefficient in {}", context)
            }
            Error::Processing { operation, details } => {
                write!(f, "processing error in {}: {}", operation, details)
            }
        }
    }
}

impl std::error::Error for Error {}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        match err {
            Error::Parameter { name, .. } => ApiError::InvalidParameter { context: name },
            Error::Length {
                context,
                expected,
                actual,
            } => ApiError::InvalidLength {
                context,
                expected,
                actual,
            },
            Error::Encoding { context } => ApiError::InvalidEncoding { context },
            Error::Processing { operation, .. } => ApiError::Internal { context: operation },
        }
    }
}

pub mod validate;
