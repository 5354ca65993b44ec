// ============================================================================
// Arithmetic Core
// The four integer operations every facade delegates to
// ============================================================================

use super::errors::{ArithmeticError, ArithmeticResult};
use tracing::trace;

/// Stateless integer arithmetic on `i64`.
///
/// `add`, `subtract` and `multiply` wrap on overflow (two's complement) in
/// both debug and release builds. `divide` truncates toward zero and is the
/// only plain operation that can fail.
///
/// # Example
/// ```
/// use layered_math::arithmetic::{ArithmeticCore, ArithmeticError};
///
/// let core = ArithmeticCore::new();
/// assert_eq!(core.add(2, 3), 5);
/// assert_eq!(core.divide(-7, 2), Ok(-3));
/// assert_eq!(core.divide(1, 0), Err(ArithmeticError::DivisionByZero));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ArithmeticCore;

impl ArithmeticCore {
    /// Create a new arithmetic core.
    #[inline]
    pub const fn new() -> Self {
        Self
    }

    // ========================================================================
    // Plain Operations
    // ========================================================================

    /// Returns `a + b`, wrapping on overflow.
    #[inline]
    pub fn add(&self, a: i64, b: i64) -> i64 {
        trace!(a, b, "add");
        a.wrapping_add(b)
    }

    /// Returns `a - b`, wrapping on overflow.
    #[inline]
    pub fn subtract(&self, a: i64, b: i64) -> i64 {
        trace!(a, b, "subtract");
        a.wrapping_sub(b)
    }

    /// Returns `a * b`, wrapping on overflow.
    #[inline]
    pub fn multiply(&self, a: i64, b: i64) -> i64 {
        trace!(a, b, "multiply");
        a.wrapping_mul(b)
    }

    /// Returns the quotient `a / b` truncated toward zero.
    ///
    /// `i64::MIN / -1` wraps to `i64::MIN`.
    ///
    /// # Errors
    /// Returns `DivisionByZero` if `b == 0`.
    #[inline]
    pub fn divide(&self, a: i64, b: i64) -> ArithmeticResult<i64> {
        trace!(a, b, "divide");
        if b == 0 {
            return Err(ArithmeticError::DivisionByZero);
        }
        Ok(a.wrapping_div(b))
    }

    // ========================================================================
    // Checked Operations
    // ========================================================================

    /// Checked addition.
    ///
    /// # Errors
    /// Returns `Overflow` or `Underflow` if the result is out of range.
    #[inline]
    pub fn checked_add(&self, a: i64, b: i64) -> ArithmeticResult<i64> {
        a.checked_add(b).ok_or(if b > 0 {
            ArithmeticError::Overflow
        } else {
            ArithmeticError::Underflow
        })
    }

    /// Checked subtraction.
    ///
    /// # Errors
    /// Returns `Overflow` or `Underflow` if the result is out of range.
    #[inline]
    pub fn checked_sub(&self, a: i64, b: i64) -> ArithmeticResult<i64> {
        a.checked_sub(b).ok_or(if b < 0 {
            ArithmeticError::Overflow
        } else {
            ArithmeticError::Underflow
        })
    }

    /// Checked multiplication.
    ///
    /// # Errors
    /// Returns `Overflow` when the true product is above `i64::MAX` and
    /// `Underflow` when it is below `i64::MIN`.
    #[inline]
    pub fn checked_mul(&self, a: i64, b: i64) -> ArithmeticResult<i64> {
        a.checked_mul(b).ok_or(if (a < 0) == (b < 0) {
            ArithmeticError::Overflow
        } else {
            ArithmeticError::Underflow
        })
    }

    /// Checked division, truncating toward zero.
    ///
    /// # Errors
    /// - `DivisionByZero` if `b == 0`
    /// - `Overflow` for `i64::MIN / -1`
    #[inline]
    pub fn checked_div(&self, a: i64, b: i64) -> ArithmeticResult<i64> {
        if b == 0 {
            return Err(ArithmeticError::DivisionByZero);
        }
        a.checked_div(b).ok_or(ArithmeticError::Overflow)
    }
}

// ============================================================================
// Tests
// ============================================================================
