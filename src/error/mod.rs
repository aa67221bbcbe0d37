//! Error handling for curve arithmetic and the exchange protocol

use std::borrow::Cow;
use std::fmt;

/// The error type for curve and exchange operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// No modular inverse exists for the requested element
    NoInverse {
        /// Element whose inverse was requested, reduced into [0, modulus)
        value: u64,
        /// Modulus of the failed inversion
        modulus: u64,
    },

    /// Exhaustive search found no point of full group order
    NoGenerator {
        /// Number of affine candidates examined
        candidates: usize,
    },

    /// Parameter validation error
    Parameter {
        /// Name of the invalid parameter
        name: Cow<'static, str>,
        /// Reason why the parameter is invalid
        reason: Cow<'static, str>,
    },
}

impl Error {
    /// Shorthand to create a Parameter error
    pub fn param<N: Into<Cow<'static, str>>, R: Into<Cow<'static, str>>>(
        name: N,
        reason: R,
    ) -> Self {
        Error::Parameter {
            name: name.into(),
            reason: reason.into(),
        }
    }
}

/// Result type for curve and exchange operations
pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::NoInverse { value, modulus } => {
                write!(f, "No inverse for {} modulo {}", value, modulus)
            }
            Error::NoGenerator { candidates } => {
                write!(
                    f,
                    "No generator among {} curve points; the group is not cyclic",
                    candidates
                )
            }
            Error::Parameter { name, reason } => {
                write!(f, "Invalid parameter '{}': {}", name, reason)
            }
        }
    }
}

impl std::error::Error for Error {}

// Include the validation submodule
pub mod validate;

#[cfg(test)]
mod tests;
