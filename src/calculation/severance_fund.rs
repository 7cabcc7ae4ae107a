//! Severance fund (FGTS) contribution calculation.
//!
//! The employer deposits 8% of the salary per month of service. On
//! termination without cause a 40% penalty is added on top, which is
//! applied as a 1.4 multiplier on the contribution.

use rust_decimal::Decimal;

use crate::config::CalculatorConfig;
use crate::error::EngineResult;
use crate::models::{AuditStep, TerminationType};

use super::arithmetic::product;

/// The result of the severance fund calculation.
#[derive(Debug, Clone)]
pub struct SeveranceFundResult {
    /// The multiplier that was applied (1.4 without cause, otherwise 1).
    pub multiplier: Decimal,
    /// Contribution including any penalty.
    pub amount: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Returns the penalty multiplier for a termination type.
pub fn penalty_multiplier(termination_type: TerminationType, config: &CalculatorConfig) -> Decimal {
    if termination_type.is_without_cause() {
        config.parameters().severance_fund.without_cause_multiplier
    } else {
        Decimal::ONE
    }
}

/// Calculates the proportional severance fund contribution.
///
/// # Examples
///
/// ```
/// use severance_engine::calculation::calculate_severance_fund;
/// use severance_engine::config::CalculatorConfig;
/// use severance_engine::models::TerminationType;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let result = calculate_severance_fund(
///     Decimal::from(5450),
///     Decimal::from(12),
///     TerminationType::WithoutCause,
///     &CalculatorConfig::statutory(),
///     5,
/// ).unwrap();
/// assert_eq!(result.amount, Decimal::from_str("7324.8").unwrap());
/// ```
pub fn calculate_severance_fund(
    base_salary: Decimal,
    months_worked: Decimal,
    termination_type: TerminationType,
    config: &CalculatorConfig,
    step_number: u32,
) -> EngineResult<SeveranceFundResult> {
    let params = &config.parameters().severance_fund;
    let rate = params.contribution_rate;
    let multiplier = penalty_multiplier(termination_type, config);
    let amount = product(
        "severance_fund",
        &[base_salary, rate, months_worked, multiplier],
    )?;

    let penalty_applied = termination_type.is_without_cause();
    let reasoning = if penalty_applied {
        format!(
            "R${} x {} x {} months x {} (without cause penalty) = R${}",
            base_salary.normalize(),
            rate.normalize(),
            months_worked.normalize(),
            multiplier.normalize(),
            amount.normalize()
        )
    } else {
        format!(
            "R${} x {} x {} months = R${} (no penalty - termination is {})",
            base_salary.normalize(),
            rate.normalize(),
            months_worked.normalize(),
            amount.normalize(),
            termination_type
        )
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "severance_fund".to_string(),
        rule_name: "Severance Fund Contribution".to_string(),
        clause_ref: params.clause.clone(),
        input: serde_json::json!({
            "base_salary": base_salary.normalize().to_string(),
            "months_worked": months_worked.normalize().to_string(),
            "contribution_rate": rate.normalize().to_string(),
            "termination_type": termination_type.as_str()
        }),
        output: serde_json::json!({
            "severance_fund_contribution": amount.normalize().to_string(),
            "multiplier": multiplier.normalize().to_string(),
            "penalty_applied": penalty_applied
        }),
        reasoning,
    };

    Ok(SeveranceFundResult {
        multiplier,
        amount,
        audit_step,
    })
}
