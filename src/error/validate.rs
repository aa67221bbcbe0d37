//! Validation utilities for curve and exchange parameters

use super::{Error, Result};

/// Validate a parameter condition
#[inline(always)]
pub fn parameter(condition: bool, name: &'static str, reason: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::param(name, reason));
    }
    Ok(())
}

/// Validate that a value lies below an exclusive upper bound
#[inline(always)]
pub fn below(name: &'static str, value: u64, bound: u64) -> Result<()> {
    if value >= bound {
        return Err(Error::param(
            name,
            format!("must be below {}, got {}", bound, value),
        ));
    }
    Ok(())
}
