// ============================================================================
// Facade Module
// Narrow-named views over the arithmetic core
// ============================================================================

mod advanced;
mod basic;

pub use advanced::AdvancedMath;
pub use basic::BasicMath;
