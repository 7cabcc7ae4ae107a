//! Hourly rate derivation.
//!
//! The hourly rate is the monthly salary divided by the monthly hour base
//! (220 hours for a 44-hour week).

use rust_decimal::Decimal;

use crate::config::CalculatorConfig;
use crate::error::EngineResult;
use crate::models::AuditStep;

use super::arithmetic::scaled_quotient;

/// The result of deriving the hourly rate, including the audit step.
#[derive(Debug, Clone)]
pub struct HourlyRateResult {
    /// Salary divided by the monthly hour base.
    pub rate: Decimal,
    /// The audit step recording this derivation.
    pub audit_step: AuditStep,
}

/// Derives the hourly rate from the monthly salary.
///
/// The rate is informational: overtime is computed from the salary directly
/// so that the division happens once, after all multiplications.
///
/// # Examples
///
/// ```
/// use severance_engine::calculation::calculate_hourly_rate;
/// use severance_engine::config::CalculatorConfig;
/// use rust_decimal::Decimal;
///
/// let result = calculate_hourly_rate(Decimal::from(2200), &CalculatorConfig::statutory(), 1).unwrap();
/// assert_eq!(result.rate, Decimal::from(10));
/// ```
pub fn calculate_hourly_rate(
    base_salary: Decimal,
    config: &CalculatorConfig,
    step_number: u32,
) -> EngineResult<HourlyRateResult> {
    let params = config.parameters();
    let hour_base = params.monthly_hour_base;
    let rate = scaled_quotient("hourly_rate", &[base_salary], hour_base)?;

    let audit_step = AuditStep {
        step_number,
        rule_id: "hourly_rate".to_string(),
        rule_name: "Hourly Rate".to_string(),
        clause_ref: params.hourly_rate_clause.clone(),
        input: serde_json::json!({
            "base_salary": base_salary.normalize().to_string(),
            "monthly_hour_base": hour_base.normalize().to_string()
        }),
        output: serde_json::json!({
            "hourly_rate": rate.normalize().to_string()
        }),
        reasoning: format!(
            "R${} / {}h = R${}",
            base_salary.normalize(),
            hour_base.normalize(),
            rate.normalize()
        ),
    };

    Ok(HourlyRateResult { rate, audit_step })
}
