//! Overtime premium calculation.
//!
//! Overtime is paid in two bands over the hourly rate:
//! - 50% premium: `hourly_rate * 1.5` per hour
//! - 100% premium: `hourly_rate * 2.0` per hour (Sundays and holidays)
//!
//! Each band is computed as `salary * premium * hours / hour_base`, which
//! equals `hourly_rate * premium * hours` without rounding the hourly rate
//! first.

use rust_decimal::Decimal;

use crate::config::CalculatorConfig;
use crate::error::{EngineError, EngineResult};
use crate::models::AuditStep;

use super::arithmetic::scaled_quotient;

/// The result of the overtime calculation.
#[derive(Debug, Clone)]
pub struct OvertimeResult {
    /// Pay for hours at the 50% premium.
    pub premium_50_amount: Decimal,
    /// Pay for hours at the 100% premium.
    pub premium_100_amount: Decimal,
    /// Sum of both bands.
    pub total: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates overtime pay for both premium bands.
///
/// # Arguments
///
/// * `base_salary` - Monthly gross salary
/// * `hours_50` - Hours at the 50% premium
/// * `hours_100` - Hours at the 100% premium
/// * `config` - Parameters holding the hour base and premium multipliers
/// * `step_number` - The step number for audit trail sequencing
///
/// # Examples
///
/// ```
/// use severance_engine::calculation::calculate_overtime;
/// use severance_engine::config::CalculatorConfig;
/// use rust_decimal::Decimal;
///
/// // R$10/h: 10h at 150% + 5h at 200%
/// let result = calculate_overtime(
///     Decimal::from(2200),
///     Decimal::from(10),
///     Decimal::from(5),
///     &CalculatorConfig::statutory(),
///     2,
/// ).unwrap();
/// assert_eq!(result.total, Decimal::from(250));
/// ```
pub fn calculate_overtime(
    base_salary: Decimal,
    hours_50: Decimal,
    hours_100: Decimal,
    config: &CalculatorConfig,
    step_number: u32,
) -> EngineResult<OvertimeResult> {
    let params = config.parameters();
    let hour_base = params.monthly_hour_base;
    let premium_50 = params.overtime.premium_50;
    let premium_100 = params.overtime.premium_100;

    let premium_50_amount =
        scaled_quotient("overtime", &[base_salary, premium_50, hours_50], hour_base)?;
    let premium_100_amount =
        scaled_quotient("overtime", &[base_salary, premium_100, hours_100], hour_base)?;
    let total = premium_50_amount
        .checked_add(premium_100_amount)
        .ok_or_else(|| EngineError::CalculationError {
            message: "overtime: amount exceeds the representable decimal range".to_string(),
        })?;

    let audit_step = AuditStep {
        step_number,
        rule_id: "overtime".to_string(),
        rule_name: "Overtime Premiums".to_string(),
        clause_ref: params.overtime.clause.clone(),
        input: serde_json::json!({
            "base_salary": base_salary.normalize().to_string(),
            "monthly_hour_base": hour_base.normalize().to_string(),
            "hours_50": hours_50.normalize().to_string(),
            "hours_100": hours_100.normalize().to_string(),
            "premium_50": premium_50.normalize().to_string(),
            "premium_100": premium_100.normalize().to_string()
        }),
        output: serde_json::json!({
            "premium_50_amount": premium_50_amount.normalize().to_string(),
            "premium_100_amount": premium_100_amount.normalize().to_string(),
            "overtime_total": total.normalize().to_string()
        }),
        reasoning: format!(
            "{}h x {} + {}h x {} at R${}/{}h = R${}",
            hours_50.normalize(),
            premium_50.normalize(),
            hours_100.normalize(),
            premium_100.normalize(),
            base_salary.normalize(),
            hour_base.normalize(),
            total.normalize()
        ),
    };

    Ok(OvertimeResult {
        premium_50_amount,
        premium_100_amount,
        total,
        audit_step,
    })
}
