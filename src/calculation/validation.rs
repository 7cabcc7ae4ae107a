//! Input validation.
//!
//! Rejects inputs that would otherwise produce negative or meaningless
//! money: a salary that is not positive, or negative hour and month counts.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::CalculationInput;

/// Validates a [`CalculationInput`].
///
/// # Errors
///
/// Returns `InvalidInput` naming the first offending field when:
/// - `base_salary <= 0`
/// - `overtime_hours_50`, `overtime_hours_100` or `months_worked` is negative
///
/// # Examples
///
/// ```
/// use severance_engine::calculation::validate_input;
/// use severance_engine::models::{CalculationInput, TerminationType};
/// use rust_decimal::Decimal;
///
/// let input = CalculationInput::new(Decimal::from(-100), Decimal::from(12), TerminationType::WithoutCause);
/// assert!(validate_input(&input).is_err());
/// ```
pub fn validate_input(input: &CalculationInput) -> EngineResult<()> {
    if input.base_salary <= Decimal::ZERO {
        return Err(EngineError::invalid_input(
            "base_salary",
            format!("must be greater than zero, got {}", input.base_salary),
        ));
    }

    let counts = [
        ("overtime_hours_50", input.overtime_hours_50),
        ("overtime_hours_100", input.overtime_hours_100),
        ("months_worked", input.months_worked),
    ];

    for (field, value) in counts {
        if value < Decimal::ZERO {
            return Err(EngineError::invalid_input(
                field,
                format!("must not be negative, got {}", value),
            ));
        }
    }

    Ok(())
}
