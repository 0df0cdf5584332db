//! Error types for coordinate and vector operations
//!
//! Every fallible operation in this crate reports one of three kinds of
//! failure. Operands are never modified when an error is returned.

use thiserror::Error;

/// Main error type for the coords library
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoordsError {
    /// An operand has the wrong kind, cannot be parsed, or is out of range
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// What was wrong with the argument
        message: String,
    },

    /// Scalar division by zero, or normalizing a zero-length vector
    #[error("{message}")]
    DivideByZero {
        /// Description of the failed division
        message: String,
    },

    /// The operation is not defined for these operands or in this state
    #[error("Unsupported operation: {message}")]
    UnsupportedOperation {
        /// Which operation was rejected
        message: String,
    },
}

impl CoordsError {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    pub fn divide_by_zero() -> Self {
        Self::DivideByZero {
            message: "division by zero is undefined".to_string(),
        }
    }

    pub fn unsupported_operation(message: impl Into<String>) -> Self {
        Self::UnsupportedOperation {
            message: message.into(),
        }
    }

    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }

    pub fn is_divide_by_zero(&self) -> bool {
        matches!(self, Self::DivideByZero { .. })
    }

    pub fn is_unsupported_operation(&self) -> bool {
        matches!(self, Self::UnsupportedOperation { .. })
    }
}

/// Result type for coords operations
pub type Result<T> = std::result::Result<T, CoordsError>;
