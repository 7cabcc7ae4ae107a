//! Proportional vacation pay calculation.
//!
//! Vacation accrues one twelfth of the salary per month of service, plus
//! the constitutional one-third bonus on top:
//! `salary * months_worked / 12 * (1 + 1/3)`.
//!
//! The bonus uses the exact rational `4/3` rather than a truncated decimal
//! such as `1.33333333`, and the division happens last.

use rust_decimal::Decimal;

use crate::config::CalculatorConfig;
use crate::error::EngineResult;
use crate::models::AuditStep;

use super::arithmetic::{product, scaled_quotient};

/// The result of the vacation pay calculation.
#[derive(Debug, Clone)]
pub struct VacationPayResult {
    /// Proportional vacation pay before the bonus.
    pub base_amount: Decimal,
    /// The one-third bonus.
    pub bonus_amount: Decimal,
    /// Vacation pay including the bonus.
    pub amount: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates proportional vacation pay including the one-third bonus.
///
/// # Examples
///
/// ```
/// use severance_engine::calculation::calculate_vacation_pay;
/// use severance_engine::config::CalculatorConfig;
/// use rust_decimal::Decimal;
///
/// let result = calculate_vacation_pay(
///     Decimal::from(3000),
///     Decimal::from(12),
///     &CalculatorConfig::statutory(),
///     4,
/// ).unwrap();
/// assert_eq!(result.amount, Decimal::from(4000));
/// ```
pub fn calculate_vacation_pay(
    base_salary: Decimal,
    months_worked: Decimal,
    config: &CalculatorConfig,
    step_number: u32,
) -> EngineResult<VacationPayResult> {
    let params = config.parameters();
    let months_per_year = params.months_per_year;
    let (bonus_numerator, bonus_denominator) = config.vacation_factor();
    let divisor = product("vacation_pay", &[months_per_year, bonus_denominator])?;

    let amount = scaled_quotient(
        "vacation_pay",
        &[base_salary, months_worked, bonus_numerator],
        divisor,
    )?;
    let base_amount = scaled_quotient(
        "vacation_pay",
        &[base_salary, months_worked],
        months_per_year,
    )?;
    let bonus_amount = amount - base_amount;

    let audit_step = AuditStep {
        step_number,
        rule_id: "vacation_pay".to_string(),
        rule_name: "Proportional Vacation Pay".to_string(),
        clause_ref: params.vacation.clause.clone(),
        input: serde_json::json!({
            "base_salary": base_salary.normalize().to_string(),
            "months_worked": months_worked.normalize().to_string(),
            "months_per_year": months_per_year.normalize().to_string(),
            "bonus_divisor": params.vacation.bonus_divisor.normalize().to_string()
        }),
        output: serde_json::json!({
            "base_amount": base_amount.normalize().to_string(),
            "bonus_amount": bonus_amount.normalize().to_string(),
            "vacation_pay": amount.normalize().to_string()
        }),
        reasoning: format!(
            "R${} / {} x {} months x {}/{} = R${}",
            base_salary.normalize(),
            months_per_year.normalize(),
            months_worked.normalize(),
            bonus_numerator.normalize(),
            bonus_denominator.normalize(),
            amount.normalize()
        ),
    };

    Ok(VacationPayResult {
        base_amount,
        bonus_amount,
        amount,
        audit_step,
    })
}
