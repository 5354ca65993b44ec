// ============================================================================
// Basic Math Facade
// Addition and subtraction
// ============================================================================

use crate::arithmetic::ArithmeticCore;

/// Addition and subtraction over an [`ArithmeticCore`].
#[derive(Debug, Clone, Copy, Default)]
pub struct BasicMath {
    core: ArithmeticCore,
}

impl BasicMath {
    pub const fn new() -> Self {
        Self::with_core(ArithmeticCore::new())
    }

    pub const fn with_core(core: ArithmeticCore) -> Self {
        Self { core }
    }

    /// `a + b`, see [`ArithmeticCore::add`].
    #[inline]
    pub fn plus(&self, a: i64, b: i64) -> i64 {
        self.core.add(a, b)
    }

    /// `a - b`, see [`ArithmeticCore::subtract`].
    #[inline]
    pub fn minus(&self, a: i64, b: i64) -> i64 {
        self.core.subtract(a, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plus() {
        let basic = BasicMath::new();
        assert_eq!(basic.plus(2, 3), 5);
        assert_eq!(basic.plus(5, -3), 2);
    }

    #[test]
    fn test_minus() {
        let basic = BasicMath::new();
        assert_eq!(basic.minus(5, 3), 2);
        assert_eq!(basic.minus(3, 5), -2);
    }

    #[test]
    fn test_matches_core() {
        let core = ArithmeticCore::new();
        let basic = BasicMath::with_core(core);
        for (a, b) in [(0, 0), (i64::MAX, 1), (i64::MIN, 1), (-17, 4)] {
            assert_eq!(basic.plus(a, b), core.add(a, b));
            assert_eq!(basic.minus(a, b), core.subtract(a, b));
        }
    }
}
