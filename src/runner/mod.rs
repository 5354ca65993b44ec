// ============================================================================
// Runner Module
// Evaluates the demo calculations through the facades
// ============================================================================

mod calculation;
mod config;

pub use calculation::{Calculation, Operation};
pub use config::DemoConfig;

use crate::arithmetic::ArithmeticResult;
use crate::facade::{AdvancedMath, BasicMath};
use tracing::debug;

/// Evaluates addition, subtraction, multiplication and division, in that
/// order, using the operands from `config`.
///
/// # Errors
/// Returns `DivisionByZero` if the division operands have a zero divisor.
///
/// # Example
/// ```
/// use layered_math::runner::{run, DemoConfig};
///
/// let results = run(&DemoConfig::default()).unwrap();
/// assert_eq!(results[0].to_string(), "Addition (2 + 3): 5");
/// ```
pub fn run(config: &DemoConfig) -> ArithmeticResult<Vec<Calculation>> {
    let basic = BasicMath::new();
    let advanced = AdvancedMath::new();

    let (a, b) = config.addition;
    let (s, t) = config.subtraction;
    let (m, n) = config.multiplication;
    let (d, e) = config.division;

    let calculations = vec![
        Calculation {
            operation: Operation::Addition,
            lhs: a,
            rhs: b,
            result: basic.plus(a, b),
        },
        Calculation {
            operation: Operation::Subtraction,
            lhs: s,
            rhs: t,
            result: basic.minus(s, t),
        },
        Calculation {
            operation: Operation::Multiplication,
            lhs: m,
            rhs: n,
            result: advanced.mult(m, n),
        },
        Calculation {
            operation: Operation::Division,
            lhs: d,
            rhs: e,
            result: advanced.div(d, e)?,
        },
    ];

    for calc in &calculations {
        debug!(operation = %calc.operation, result = calc.result, "calculated");
    }

    Ok(calculations)
}
