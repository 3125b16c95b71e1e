//! Error types for rational and quantity operations.

use crate::dimension::Dimensions;

/// Result type for fallible quantity and exponent operations.
pub type Result<T> = core::result::Result<T, UqntError>;

/// Error type for rational exponents and uncertainty quantities.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum UqntError {
    /// An input violated the operation's contract (zero denominator, negative uncertainty, …).
    #[error("Precondition violated: {0}")]
    PreconditionViolation(String),

    /// Operands carry incompatible dimension exponents.
    #[error("Dimension mismatch in {operation}: [{left} ] vs [{right} ]")]
    DimensionMismatch {
        /// Name of the operation that rejected its operands.
        operation: &'static str,
        /// Dimensions of the left operand.
        left: Dimensions,
        /// Dimensions of the right operand.
        right: Dimensions,
    },

    /// Malformed rational exponent literal.
    #[error("Cannot parse rational exponent '{input}': {reason}")]
    Parse {
        /// The rejected text.
        input: String,
        /// What was wrong with it.
        reason: String,
    },

    /// A reduced exponent does not fit the machine integer width.
    #[error("Rational exponent overflow")]
    Overflow,
}

/// Coarse classification of [`UqntError`] values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Invalid inputs; the call could not produce a valid value.
    PreconditionViolation,
    /// Dimensional inconsistency between operands.
    DimensionMismatch,
    /// Malformed literal text.
    ParseError,
}

impl UqntError {
    /// Returns the coarse kind of this error.
    ///
    /// Overflow is reported as a precondition violation: the operands were outside the
    /// representable exponent range.
    pub fn kind(&self) -> ErrorKind {
        match self {
            UqntError::PreconditionViolation(_) | UqntError::Overflow => {
                ErrorKind::PreconditionViolation
            }
            UqntError::DimensionMismatch { .. } => ErrorKind::DimensionMismatch,
            UqntError::Parse { .. } => ErrorKind::ParseError,
        }
    }

    pub(crate) fn precondition(message: impl Into<String>) -> Self {
        UqntError::PreconditionViolation(message.into())
    }

    pub(crate) fn parse(input: &str, reason: impl Into<String>) -> Self {
        UqntError::Parse {
            input: input.to_string(),
            reason: reason.into(),
        }
    }
}
