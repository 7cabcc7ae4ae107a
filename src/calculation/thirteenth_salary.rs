//! Proportional 13th salary calculation.
//!
//! One twelfth of the monthly salary is earned per month of service:
//! `salary * months_worked / 12`.

use rust_decimal::Decimal;

use crate::config::CalculatorConfig;
use crate::error::EngineResult;
use crate::models::AuditStep;

use super::arithmetic::scaled_quotient;

/// The result of the 13th salary calculation.
#[derive(Debug, Clone)]
pub struct ThirteenthSalaryResult {
    /// The proportional 13th salary.
    pub amount: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates the proportional 13th salary.
///
/// # Examples
///
/// ```
/// use severance_engine::calculation::calculate_thirteenth_salary;
/// use severance_engine::config::CalculatorConfig;
/// use rust_decimal::Decimal;
///
/// let result = calculate_thirteenth_salary(
///     Decimal::from(1200),
///     Decimal::new(65, 1),
///     &CalculatorConfig::statutory(),
///     3,
/// ).unwrap();
/// assert_eq!(result.amount, Decimal::from(650));
/// ```
pub fn calculate_thirteenth_salary(
    base_salary: Decimal,
    months_worked: Decimal,
    config: &CalculatorConfig,
    step_number: u32,
) -> EngineResult<ThirteenthSalaryResult> {
    let params = config.parameters();
    let months_per_year = params.months_per_year;
    let amount = scaled_quotient(
        "thirteenth_salary",
        &[base_salary, months_worked],
        months_per_year,
    )?;

    let audit_step = AuditStep {
        step_number,
        rule_id: "thirteenth_salary".to_string(),
        rule_name: "Proportional 13th Salary".to_string(),
        clause_ref: params.thirteenth_salary.clause.clone(),
        input: serde_json::json!({
            "base_salary": base_salary.normalize().to_string(),
            "months_worked": months_worked.normalize().to_string(),
            "months_per_year": months_per_year.normalize().to_string()
        }),
        output: serde_json::json!({
            "thirteenth_salary": amount.normalize().to_string()
        }),
        reasoning: format!(
            "R${} / {} x {} months = R${}",
            base_salary.normalize(),
            months_per_year.normalize(),
            months_worked.normalize(),
            amount.normalize()
        ),
    };

    Ok(ThirteenthSalaryResult { amount, audit_step })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn thirteenth(salary: &str, months: &str) -> ThirteenthSalaryResult {
        calculate_thirteenth_salary(dec(salary), dec(months), &CalculatorConfig::statutory(), 1)
            .unwrap()
    }

    #[test]
    fn test_full_year_is_one_salary() {
        assert_eq!(thirteenth("5450", "12").amount, dec("5450"));
    }

    #[test]
    fn test_zero_months_is_zero() {
        assert_eq!(thirteenth("5450", "0").amount, Decimal::ZERO);
    }

    #[test]
    fn test_fractional_months_scale_proportionally() {
        assert_eq!(thirteenth("1200", "6.5").amount, dec("650"));
    }

    #[test]
    fn test_repeating_twelfth_is_kept_exact() {
        // 1000 * 1 / 12 = 83.333...
        let result = thirteenth("1000", "1");
        assert_eq!(result.amount.round_dp(2), dec("83.33"));
        assert!(result.amount > dec("83.3333"));
    }

    #[test]
    fn test_audit_step() {
        let result = thirteenth("1200", "6.5");

        assert_eq!(result.audit_step.rule_id, "thirteenth_salary");
        assert_eq!(result.audit_step.clause_ref, "Lei 4.090/1962 art. 1 §2");
        assert_eq!(
            result.audit_step.input["months_worked"].as_str().unwrap(),
            "6.5"
        );
        assert_eq!(
            result.audit_step.output["thirteenth_salary"].as_str().unwrap(),
            "650"
        );
        assert_eq!(result.audit_step.reasoning, "R$1200 / 12 x 6.5 months = R$650");
    }
}
