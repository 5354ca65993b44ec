// ============================================================================
// Arithmetic Errors
// Error types for integer arithmetic operations
// ============================================================================

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Errors that can occur during integer arithmetic operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ArithmeticError {
    /// Attempted division by zero
    DivisionByZero,
    /// Result exceeded i64::MAX (checked operations only)
    Overflow,
    /// Result below i64::MIN (checked operations only)
    Underflow,
}

impl fmt::Display for ArithmeticError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArithmeticError::DivisionByZero => write!(f, "division by zero"),
            ArithmeticError::Overflow => {
                write!(f, "arithmetic overflow: result exceeded maximum value")
            },
            ArithmeticError::Underflow => {
                write!(f, "arithmetic underflow: result below minimum value")
            },
        }
    }
}

impl std::error::Error for ArithmeticError {}

/// Result type alias for arithmetic operations
pub type ArithmeticResult<T> = Result<T, ArithmeticError>;
