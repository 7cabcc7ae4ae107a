//! Severance calculation pipeline.
//!
//! Runs validation and every component calculation in order, numbering the
//! audit steps and collecting warnings:
//!
//! 1. Hourly rate
//! 2. Overtime premiums
//! 3. Proportional 13th salary
//! 4. Proportional vacation pay with the one-third bonus
//! 5. Severance fund contribution
//! 6. Total

use rust_decimal::Decimal;

use crate::config::CalculatorConfig;
use crate::error::{EngineError, EngineResult};
use crate::models::{
    AuditStep, AuditTrace, AuditWarning, CalculationInput, CalculationResult,
    SeveranceCalculation, TerminationType,
};

use super::{
    calculate_hourly_rate, calculate_overtime, calculate_severance_fund,
    calculate_thirteenth_salary, calculate_vacation_pay, validate_input,
};

/// Warning code raised when more than a year of service is settled at once.
pub const WARNING_MONTHS_EXCEED_YEAR: &str = "MONTHS_EXCEED_YEAR";

/// Warning code raised when proportional amounts are computed for a
/// dismissal with cause.
pub const WARNING_WITH_CAUSE_PROPORTIONAL: &str = "WITH_CAUSE_PROPORTIONAL_AMOUNTS";

/// Computes the severance breakdown with the statutory parameters.
///
/// Pure: the input is not mutated and identical inputs give identical
/// results.
///
/// # Errors
///
/// Returns `InvalidInput` when `base_salary <= 0` or any count is negative.
///
/// # Examples
///
/// ```
/// use severance_engine::calculation::compute;
/// use severance_engine::models::{CalculationInput, TerminationType};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let input = CalculationInput::new(
///     Decimal::from(5450),
///     Decimal::from(12),
///     TerminationType::EmployeeResignation,
/// );
/// let result = compute(&input).unwrap();
/// assert_eq!(result.severance_fund_contribution, Decimal::from(5232));
/// assert_eq!(result.rounded_to_cents().total, Decimal::from_str("17948.67").unwrap());
/// ```
pub fn compute(input: &CalculationInput) -> EngineResult<CalculationResult> {
    calculate_severance(input, &CalculatorConfig::statutory()).map(|calc| calc.result)
}

/// Computes the severance breakdown with explicit parameters, returning
/// the full audit trace alongside the result.
pub fn calculate_severance(
    input: &CalculationInput,
    config: &CalculatorConfig,
) -> EngineResult<SeveranceCalculation> {
    validate_input(input)?;

    let mut steps: Vec<AuditStep> = Vec::with_capacity(6);
    let mut step_number: u32 = 1;

    let hourly_rate = calculate_hourly_rate(input.base_salary, config, step_number)?;
    steps.push(hourly_rate.audit_step);
    step_number += 1;

    let overtime = calculate_overtime(
        input.base_salary,
        input.overtime_hours_50,
        input.overtime_hours_100,
        config,
        step_number,
    )?;
    steps.push(overtime.audit_step);
    step_number += 1;

    let thirteenth = calculate_thirteenth_salary(
        input.base_salary,
        input.months_worked,
        config,
        step_number,
    )?;
    steps.push(thirteenth.audit_step);
    step_number += 1;

    let vacation =
        calculate_vacation_pay(input.base_salary, input.months_worked, config, step_number)?;
    steps.push(vacation.audit_step);
    step_number += 1;

    let fund = calculate_severance_fund(
        input.base_salary,
        input.months_worked,
        input.termination_type,
        config,
        step_number,
    )?;
    steps.push(fund.audit_step);
    step_number += 1;

    let result = CalculationResult::from_components(
        overtime.total,
        thirteenth.amount,
        vacation.amount,
        fund.amount,
    )
    .ok_or_else(|| EngineError::CalculationError {
        message: "total: amount exceeds the representable decimal range".to_string(),
    })?;
    steps.push(total_step(&result, step_number));

    Ok(SeveranceCalculation {
        input: input.clone(),
        hourly_rate: hourly_rate.rate,
        result,
        audit_trace: AuditTrace {
            steps,
            warnings: collect_warnings(input, config),
        },
    })
}

fn total_step(result: &CalculationResult, step_number: u32) -> AuditStep {
    AuditStep {
        step_number,
        rule_id: "total".to_string(),
        rule_name: "Total".to_string(),
        clause_ref: String::new(),
        input: serde_json::json!({
            "overtime_total": result.overtime_total.normalize().to_string(),
            "thirteenth_salary": result.thirteenth_salary.normalize().to_string(),
            "vacation_pay": result.vacation_pay.normalize().to_string(),
            "severance_fund_contribution": result.severance_fund_contribution.normalize().to_string()
        }),
        output: serde_json::json!({
            "total": result.total.normalize().to_string()
        }),
        reasoning: format!(
            "R${} + R${} + R${} + R${} = R${}",
            result.overtime_total.normalize(),
            result.thirteenth_salary.normalize(),
            result.vacation_pay.normalize(),
            result.severance_fund_contribution.normalize(),
            result.total.normalize()
        ),
    }
}

fn collect_warnings(input: &CalculationInput, config: &CalculatorConfig) -> Vec<AuditWarning> {
    let mut warnings = Vec::new();
    let months_per_year = config.parameters().months_per_year;

    if input.months_worked > months_per_year {
        warnings.push(AuditWarning {
            code: WARNING_MONTHS_EXCEED_YEAR.to_string(),
            message: format!(
                "{} months exceed one accrual year of {} months; 13th salary and vacation \
                 are usually settled per period",
                input.months_worked.normalize(),
                months_per_year.normalize()
            ),
            severity: "low".to_string(),
        });
    }

    if input.termination_type == TerminationType::WithCause && input.months_worked > Decimal::ZERO
    {
        warnings.push(AuditWarning {
            code: WARNING_WITH_CAUSE_PROPORTIONAL.to_string(),
            message: "proportional 13th salary and vacation are generally forfeited on \
                      dismissal with cause"
                .to_string(),
            severity: "medium".to_string(),
        });
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn reference_input(termination_type: TerminationType) -> CalculationInput {
        CalculationInput::new(dec("5450"), dec("12"), termination_type)
    }

    #[test]
    fn test_reference_scenario_without_cause() {
        let result = compute(&reference_input(TerminationType::WithoutCause)).unwrap();

        assert_eq!(result.overtime_total, Decimal::ZERO);
        assert_eq!(result.thirteenth_salary, dec("5450"));
        assert_eq!(result.vacation_pay.round_dp(2), dec("7266.67"));
        assert_eq!(result.severance_fund_contribution, dec("7324.8"));
        assert_eq!(result.rounded_to_cents().total, dec("20041.47"));
    }

    #[test]
    fn test_reference_scenario_resignation() {
        let result = compute(&reference_input(TerminationType::EmployeeResignation)).unwrap();

        assert_eq!(result.severance_fund_contribution, dec("5232"));
        assert_eq!(result.rounded_to_cents().total, dec("17948.67"));
    }

    #[test]
    fn test_total_is_exact_sum_of_components() {
        let input = CalculationInput::new(dec("3781.45"), dec("7.5"), TerminationType::WithCause)
            .with_overtime(dec("12.5"), dec("3"));
        let result = compute(&input).unwrap();

        assert_eq!(
            result.total,
            result.overtime_total
                + result.thirteenth_salary
                + result.vacation_pay
                + result.severance_fund_contribution
        );
    }

    #[test]
    fn test_zero_months_zeroes_proportional_amounts() {
        let input = CalculationInput::new(dec("5450"), Decimal::ZERO, TerminationType::WithoutCause)
            .with_overtime(dec("10"), Decimal::ZERO);
        let result = compute(&input).unwrap();

        assert_eq!(result.thirteenth_salary, Decimal::ZERO);
        assert_eq!(result.vacation_pay, Decimal::ZERO);
        assert_eq!(result.severance_fund_contribution, Decimal::ZERO);
        assert_eq!(result.total, result.overtime_total);
    }

    #[test]
    fn test_fractional_months() {
        let input = CalculationInput::new(dec("1200"), dec("6.5"), TerminationType::EmployeeResignation);
        let result = compute(&input).unwrap();

        assert_eq!(result.thirteenth_salary, dec("650"));
        assert_eq!(result.vacation_pay.round_dp(2), dec("866.67"));
        assert_eq!(result.severance_fund_contribution, dec("624"));
    }

    #[test]
    fn test_negative_salary_is_rejected() {
        let mut input = reference_input(TerminationType::WithoutCause);
        input.base_salary = dec("-100");

        match compute(&input) {
            Err(EngineError::InvalidInput { field, .. }) => assert_eq!(field, "base_salary"),
            other => panic!("Expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn test_input_is_not_mutated() {
        let input = reference_input(TerminationType::WithoutCause).with_overtime(dec("3"), dec("1"));
        let before = input.clone();
        let calc = calculate_severance(&input, &CalculatorConfig::statutory()).unwrap();

        assert_eq!(input, before);
        assert_eq!(calc.input, before);
    }

    #[test]
    fn test_repeated_calls_are_identical() {
        let input = reference_input(TerminationType::WithoutCause).with_overtime(dec("7"), dec("2"));

        assert_eq!(compute(&input).unwrap(), compute(&input).unwrap());
    }

    #[test]
    fn test_total_reasoning_is_in_reais() {
        let calc = calculate_severance(
            &reference_input(TerminationType::EmployeeResignation),
            &CalculatorConfig::statutory(),
        )
        .unwrap();

        let total_step = calc.audit_trace.steps.last().unwrap();
        assert_eq!(total_step.rule_id, "total");
        assert!(total_step.reasoning.starts_with("R$0 + R$5450 + R$"));
        assert!(total_step.reasoning.contains("+ R$5232 = R$"));
    }

    #[test]
    fn test_audit_trace_has_one_step_per_formula() {
        let calc = calculate_severance(
            &reference_input(TerminationType::WithoutCause),
            &CalculatorConfig::statutory(),
        )
        .unwrap();

        let rule_ids: Vec<&str> = calc
            .audit_trace
            .steps
            .iter()
            .map(|s| s.rule_id.as_str())
            .collect();
        assert_eq!(
            rule_ids,
            vec![
                "hourly_rate",
                "overtime",
                "thirteenth_salary",
                "vacation_pay",
                "severance_fund",
                "total"
            ]
        );
        let numbers: Vec<u32> = calc.audit_trace.steps.iter().map(|s| s.step_number).collect();
        assert_eq!(numbers, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_hourly_rate_is_reported() {
        let input = CalculationInput::new(dec("2200"), dec("1"), TerminationType::WithCause);
        let calc = calculate_severance(&input, &CalculatorConfig::statutory()).unwrap();

        assert_eq!(calc.hourly_rate, dec("10"));
    }

    #[test]
    fn test_no_warnings_for_single_year_without_cause() {
        let calc = calculate_severance(
            &reference_input(TerminationType::WithoutCause),
            &CalculatorConfig::statutory(),
        )
        .unwrap();

        assert!(calc.audit_trace.warnings.is_empty());
    }

    #[test]
    fn test_warns_when_months_exceed_year() {
        let input = CalculationInput::new(dec("5450"), dec("18"), TerminationType::WithoutCause);
        let calc = calculate_severance(&input, &CalculatorConfig::statutory()).unwrap();

        assert_eq!(calc.audit_trace.warnings.len(), 1);
        assert_eq!(calc.audit_trace.warnings[0].code, WARNING_MONTHS_EXCEED_YEAR);
        assert!(calc.audit_trace.warnings[0].message.contains("18"));
    }

    #[test]
    fn test_warns_on_with_cause_proportional_amounts() {
        let calc = calculate_severance(
            &reference_input(TerminationType::WithCause),
            &CalculatorConfig::statutory(),
        )
        .unwrap();

        assert_eq!(calc.audit_trace.warnings.len(), 1);
        assert_eq!(
            calc.audit_trace.warnings[0].code,
            WARNING_WITH_CAUSE_PROPORTIONAL
        );
        assert_eq!(calc.audit_trace.warnings[0].severity, "medium");
    }

    #[test]
    fn test_custom_hour_base_changes_overtime() {
        let statutory = CalculatorConfig::statutory();
        let mut parameters = statutory.parameters().clone();
        parameters.monthly_hour_base = dec("200");
        let config = CalculatorConfig::new(statutory.regime().clone(), parameters).unwrap();

        let input = CalculationInput::new(dec("2000"), Decimal::ZERO, TerminationType::WithCause)
            .with_overtime(dec("10"), Decimal::ZERO);
        let calc = calculate_severance(&input, &config).unwrap();

        // R$10/h * 1.5 * 10h
        assert_eq!(calc.result.overtime_total, dec("150"));
        assert_eq!(calc.hourly_rate, dec("10"));
    }

    #[test]
    fn test_overflow_is_calculation_error() {
        let input = CalculationInput::new(
            Decimal::MAX,
            Decimal::MAX,
            TerminationType::WithoutCause,
        );

        assert!(matches!(
            compute(&input),
            Err(EngineError::CalculationError { .. })
        ));
    }
}
