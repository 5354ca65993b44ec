// ============================================================================
// Advanced Math Facade
// Multiplication and division
// ============================================================================

use crate::arithmetic::{ArithmeticCore, ArithmeticResult};

/// Multiplication and division over an [`ArithmeticCore`].
///
/// Errors from the core are returned as-is.
#[derive(Debug, Clone, Copy, Default)]
pub struct AdvancedMath {
    core: ArithmeticCore,
}

impl AdvancedMath {
    pub const fn new() -> Self {
        Self::with_core(ArithmeticCore::new())
    }

    pub const fn with_core(core: ArithmeticCore) -> Self {
        Self { core }
    }

    /// `a * b`, see [`ArithmeticCore::multiply`].
    #[inline]
    pub fn mult(&self, a: i64, b: i64) -> i64 {
        self.core.multiply(a, b)
    }

    /// `a / b`, see [`ArithmeticCore::divide`].
    ///
    /// # Errors
    /// Returns `DivisionByZero` if `b == 0`.
    #[inline]
    pub fn div(&self, a: i64, b: i64) -> ArithmeticResult<i64> {
        self.core.divide(a, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arithmetic::ArithmeticError;

    #[test]
    fn test_mult() {
        let advanced = AdvancedMath::new();
        assert_eq!(advanced.mult(2, 3), 6);
        assert_eq!(advanced.mult(-4, 3), -12);
    }

    #[test]
    fn test_div() {
        let advanced = AdvancedMath::new();
        assert_eq!(advanced.div(6, 2), Ok(3));
        assert_eq!(advanced.div(-9, 2), Ok(-4));
    }

    #[test]
    fn test_div_by_zero_propagates() {
        let advanced = AdvancedMath::new();
        assert_eq!(advanced.div(6, 0), Err(ArithmeticError::DivisionByZero));
    }
}
