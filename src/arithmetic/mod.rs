// ============================================================================
// Arithmetic Module
// Integer arithmetic shared by every facade
// ============================================================================
//
// This module provides:
// - ArithmeticCore: stateless add/subtract/multiply/divide on i64
// - ArithmeticError: error types for arithmetic operations
//
// Design principles:
// - Plain operations wrap on overflow, independent of build profile
// - Division returns Result; a zero divisor never panics
// - checked_* variants report Overflow/Underflow instead of wrapping

mod errors;
mod operations;

pub use errors::{ArithmeticError, ArithmeticResult};
pub use operations::ArithmeticCore;
