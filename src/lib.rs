// ============================================================================
// Layered Math Library
// Integer arithmetic core with basic and advanced facades
// ============================================================================

//! # Layered Math
//!
//! A small integer arithmetic core consumed through two thin facades.
//!
//! ## Layers
//!
//! - [`arithmetic`]: `add`, `subtract`, `multiply`, `divide` on `i64`
//! - [`facade`]: [`BasicMath`](facade::BasicMath) (`plus`, `minus`) and
//!   [`AdvancedMath`](facade::AdvancedMath) (`mult`, `div`)
//! - [`runner`]: evaluates a fixed set of sample calculations
//!
//! ## Example
//!
//! ```rust
//! use layered_math::prelude::*;
//!
//! let basic = BasicMath::new();
//! let advanced = AdvancedMath::new();
//!
//! assert_eq!(basic.plus(2, 3), 5);
//! assert_eq!(basic.minus(5, 3), 2);
//! assert_eq!(advanced.mult(2, 3), 6);
//! assert_eq!(advanced.div(6, 2), Ok(3));
//! assert_eq!(advanced.div(6, 0), Err(ArithmeticError::DivisionByZero));
//! ```

pub mod arithmetic;
pub mod facade;
pub mod runner;

// Re-exports for convenience
pub mod prelude {
    pub use crate::arithmetic::{ArithmeticCore, ArithmeticError, ArithmeticResult};
    pub use crate::facade::{AdvancedMath, BasicMath};
    pub use crate::runner::{run, Calculation, DemoConfig, Operation};
}
