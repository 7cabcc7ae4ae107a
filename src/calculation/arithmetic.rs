//! Checked decimal arithmetic shared by the component calculations.
//!
//! Amounts multiply before they divide so that exact inputs stay exact
//! (e.g. `5450 * 12 / 12` is `5450`, not `5449.99...`).

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};

fn out_of_range(rule_id: &str) -> EngineError {
    EngineError::CalculationError {
        message: format!("{}: amount exceeds the representable decimal range", rule_id),
    }
}

/// Multiplies all factors together.
pub(crate) fn product(rule_id: &str, factors: &[Decimal]) -> EngineResult<Decimal> {
    factors
        .iter()
        .try_fold(Decimal::ONE, |acc, factor| acc.checked_mul(*factor))
        .ok_or_else(|| out_of_range(rule_id))
}

/// Multiplies all factors together, then divides by `divisor`.
pub(crate) fn scaled_quotient(
    rule_id: &str,
    factors: &[Decimal],
    divisor: Decimal,
) -> EngineResult<Decimal> {
    product(rule_id, factors)?
        .checked_div(divisor)
        .ok_or_else(|| out_of_range(rule_id))
}
