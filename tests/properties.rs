//! Property-based tests for the severance calculation engine.
//!
//! These tests verify that the arithmetic relationships between the
//! components hold across a wide range of inputs, using `proptest` for
//! random case generation.

use proptest::prelude::*;
use rust_decimal::Decimal;

use severance_engine::calculation::compute;
use severance_engine::models::{CalculationInput, TerminationType};

// =============================================================================
// Generators
// =============================================================================

/// Salaries from 0.01 to 1,000,000.00 in whole centavos.
fn arb_salary() -> impl Strategy<Value = Decimal> {
    (1i64..=100_000_000).prop_map(|cents| Decimal::new(cents, 2))
}

/// Months of service from 0 to 60 in tenths.
fn arb_months() -> impl Strategy<Value = Decimal> {
    (0i64..=600).prop_map(|tenths| Decimal::new(tenths, 1))
}

/// Overtime hour counts from 0 to 200 in quarter hours.
fn arb_hours() -> impl Strategy<Value = Decimal> {
    (0i64..=800).prop_map(|quarters| Decimal::new(quarters * 25, 2))
}

fn arb_termination_type() -> impl Strategy<Value = TerminationType> {
    prop_oneof![
        Just(TerminationType::WithoutCause),
        Just(TerminationType::EmployeeResignation),
        Just(TerminationType::WithCause),
    ]
}

fn arb_input() -> impl Strategy<Value = CalculationInput> {
    (
        arb_salary(),
        arb_hours(),
        arb_hours(),
        arb_months(),
        arb_termination_type(),
    )
        .prop_map(|(salary, h50, h100, months, termination_type)| {
            CalculationInput::new(salary, months, termination_type).with_overtime(h50, h100)
        })
}

// =============================================================================
// Property Tests
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// The total is exactly the sum of the four components.
    #[test]
    fn prop_total_is_sum_of_components(input in arb_input()) {
        let result = compute(&input).unwrap();

        prop_assert_eq!(
            result.total,
            result.overtime_total
                + result.thirteenth_salary
                + result.vacation_pay
                + result.severance_fund_contribution
        );
    }

    /// With no service time, only overtime contributes.
    #[test]
    fn prop_zero_months_zero_proportional_amounts(
        salary in arb_salary(),
        h50 in arb_hours(),
        h100 in arb_hours(),
        termination_type in arb_termination_type(),
    ) {
        let input = CalculationInput::new(salary, Decimal::ZERO, termination_type)
            .with_overtime(h50, h100);
        let result = compute(&input).unwrap();

        prop_assert!(result.thirteenth_salary.is_zero());
        prop_assert!(result.vacation_pay.is_zero());
        prop_assert!(result.severance_fund_contribution.is_zero());
        prop_assert_eq!(result.total, result.overtime_total);
    }

    /// The fund under dismissal without cause is exactly 1.4 times the
    /// plain contribution.
    #[test]
    fn prop_without_cause_fund_is_exact_multiple(
        salary in arb_salary(),
        months in arb_months(),
    ) {
        let without_cause =
            compute(&CalculationInput::new(salary, months, TerminationType::WithoutCause)).unwrap();
        let resignation = compute(&CalculationInput::new(
            salary,
            months,
            TerminationType::EmployeeResignation,
        ))
        .unwrap();
        let with_cause =
            compute(&CalculationInput::new(salary, months, TerminationType::WithCause)).unwrap();

        prop_assert_eq!(
            without_cause.severance_fund_contribution,
            resignation.severance_fund_contribution * Decimal::new(14, 1)
        );
        prop_assert_eq!(
            resignation.severance_fund_contribution,
            with_cause.severance_fund_contribution
        );
    }

    /// Termination type only affects the fund.
    #[test]
    fn prop_termination_type_only_affects_fund(
        salary in arb_salary(),
        months in arb_months(),
    ) {
        let a = compute(&CalculationInput::new(salary, months, TerminationType::WithoutCause)).unwrap();
        let b = compute(&CalculationInput::new(salary, months, TerminationType::WithCause)).unwrap();

        prop_assert_eq!(a.thirteenth_salary, b.thirteenth_salary);
        prop_assert_eq!(a.vacation_pay, b.vacation_pay);
        prop_assert_eq!(a.overtime_total, b.overtime_total);
    }

    /// Overtime is linear in each hour count independently. Salaries are
    /// multiples of 220 so the hourly rate is a whole number.
    #[test]
    fn prop_overtime_linear_in_each_hour_count(
        rate in 1i64..=5_000,
        h50 in arb_hours(),
        h100 in arb_hours(),
    ) {
        let salary = Decimal::from(rate * 220);
        let overtime = |hours_50: Decimal, hours_100: Decimal| {
            let input = CalculationInput::new(salary, Decimal::ZERO, TerminationType::WithoutCause)
                .with_overtime(hours_50, hours_100);
            compute(&input).unwrap().overtime_total
        };

        let combined = overtime(h50, h100);
        let only_50 = overtime(h50, Decimal::ZERO);
        let only_100 = overtime(Decimal::ZERO, h100);
        let hourly = Decimal::from(rate);

        prop_assert_eq!(combined, only_50 + only_100);
        prop_assert_eq!(only_50, hourly * Decimal::new(15, 1) * h50);
        prop_assert_eq!(only_100, hourly * Decimal::from(2) * h100);
    }

    /// Non-positive salaries are rejected rather than computed.
    #[test]
    fn prop_non_positive_salary_rejected(
        cents in -100_000_000i64..=0,
        months in arb_months(),
    ) {
        let input = CalculationInput::new(
            Decimal::new(cents, 2),
            months,
            TerminationType::WithoutCause,
        );
        prop_assert!(compute(&input).is_err());
    }

    /// Identical inputs give identical results.
    #[test]
    fn prop_deterministic(input in arb_input()) {
        prop_assert_eq!(compute(&input).unwrap(), compute(&input).unwrap());
    }
}
