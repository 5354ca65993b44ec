// ============================================================================
// Demo Configuration
// Operand pairs evaluated by the demo runner
// ============================================================================

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Operands for each of the four demo calculations, as `(lhs, rhs)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DemoConfig {
    pub addition: (i64, i64),
    pub subtraction: (i64, i64),
    pub multiplication: (i64, i64),
    /// The divisor (`.1`) must be non-zero
    pub division: (i64, i64),
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            addition: (2, 3),
            subtraction: (5, 3),
            multiplication: (2, 3),
            division: (6, 2),
        }
    }
}

impl DemoConfig {
    /// Validates the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.division.1 == 0 {
            return Err("Division divisor cannot be zero".to_string());
        }
        Ok(())
    }
}
