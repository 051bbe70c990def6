//! Domain error types

use thiserror::Error;

/// Result type alias for domain operations.
pub type Result<T> = std::result::Result<T, TheoryError>;

/// Errors raised when a value would violate its invariant
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TheoryError {
    /// Hertz value is negative, positive infinity, or NaN
    #[error("{hertz} hz is not a valid value for a frequency")]
    InvalidFrequency {
        /// The rejected hertz value
        hertz: f64,
    },

    /// Argument failed validation (e.g. a blank note letter)
    #[error("Invalid argument `{name}`: {message}")]
    InvalidArgument {
        /// Name of the offending argument
        name: &'static str,
        /// Description of the issue
        message: String,
    },

    /// Accidental adjustment left the supported range
    #[error(
        "Applying {adjustment} to an original value of {original} results in too many accidentals applied"
    )]
    OutOfRange {
        /// Accidental count before adjustment
        original: i16,
        /// Requested adjustment
        adjustment: i32,
    },

    /// A required value was not supplied
    #[error("Missing required argument `{name}`")]
    NullArgument {
        /// Name of the missing argument
        name: &'static str,
    },
}

impl TheoryError {
    pub(crate) fn invalid_argument(name: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            name,
            message: message.into(),
        }
    }
}
