//! Small validation helpers shared by the primitive implementations.

use super::{Error, Result};

/// Check a parameter condition, failing with `Error::Parameter`.
pub fn parameter(condition: bool, name: &'static str, reason: &'static str) -> Result<()> {
    if condition {
        Ok(())
    } else {
        Err(Error::Parameter { name, reason })
    }
}

/// Check an exact length, failing with `Error::Length`.
pub fn length(context: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual == expected {
        Ok(())
    } else {
        Err(Error::Length {
            context,
            expected,
            actual,
        })
    }
}
