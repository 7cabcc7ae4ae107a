//! Calculation result models for the Severance Engine.
//!
//! This module contains the [`CalculationResult`] breakdown and the
//! [`SeveranceCalculation`] that pairs it with the validated input, the
//! derived hourly rate and a step-by-step audit trace.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use super::CalculationInput;

/// Number of decimal places of the smallest currency unit (centavos).
pub const CURRENCY_DECIMAL_PLACES: u32 = 2;

/// Rounds an amount to the smallest currency unit, half away from zero.
///
/// # Example
///
/// ```
/// use severance_engine::models::round_to_cents;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let amount = Decimal::from_str("7266.665").unwrap();
/// assert_eq!(round_to_cents(amount), Decimal::from_str("7266.67").unwrap());
/// ```
pub fn round_to_cents(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(
        CURRENCY_DECIMAL_PLACES,
        RoundingStrategy::MidpointAwayFromZero,
    )
}

/// The amounts owed to an employee, one field per component.
///
/// Amounts are exact decimals; rounding happens only at presentation
/// through [`CalculationResult::rounded_to_cents`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// Sum of 50%- and 100%-premium overtime pay.
    pub overtime_total: Decimal,
    /// Proportional year-end bonus.
    pub thirteenth_salary: Decimal,
    /// Proportional vacation pay including the one-third bonus.
    pub vacation_pay: Decimal,
    /// Proportional severance fund contribution, with the penalty when the
    /// termination is without cause.
    pub severance_fund_contribution: Decimal,
    /// Sum of the four components above.
    pub total: Decimal,
}

impl CalculationResult {
    /// Builds a result from its four components; the total is their sum.
    ///
    /// Returns `None` when the sum leaves the decimal range.
    pub fn from_components(
        overtime_total: Decimal,
        thirteenth_salary: Decimal,
        vacation_pay: Decimal,
        severance_fund_contribution: Decimal,
    ) -> Option<Self> {
        let total = overtime_total
            .checked_add(thirteenth_salary)?
            .checked_add(vacation_pay)?
            .checked_add(severance_fund_contribution)?;

        Some(Self {
            overtime_total,
            thirteenth_salary,
            vacation_pay,
            severance_fund_contribution,
            total,
        })
    }

    /// Returns a copy with every amount rounded to centavos.
    ///
    /// The total is the exact total rounded once, so it may differ by a
    /// centavo from the sum of the rounded components.
    pub fn rounded_to_cents(&self) -> Self {
        Self {
            overtime_total: round_to_cents(self.overtime_total),
            thirteenth_salary: round_to_cents(self.thirteenth_salary),
            vacation_pay: round_to_cents(self.vacation_pay),
            severance_fund_contribution: round_to_cents(self.severance_fund_contribution),
            total: round_to_cents(self.total),
        }
    }
}

/// A single step in the audit trace recording a calculation decision.
///
/// Each step captures the input, output, and reasoning for a formula.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// Reference to the legal provision for this rule.
    pub clause_ref: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// A warning generated during calculation.
///
/// Warnings flag inputs that compute but may not reflect what is legally
/// owed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level ("low", "medium", "high").
    pub severity: String,
}

/// The complete audit trace for a calculation.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
    /// Any warnings generated during calculation.
    pub warnings: Vec<AuditWarning>,
}

/// A traced severance calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeveranceCalculation {
    /// The validated input the calculation ran on.
    pub input: CalculationInput,
    /// Salary divided by the monthly hour base.
    pub hourly_rate: Decimal,
    /// The exact breakdown.
    pub result: CalculationResult,
    /// Every formula applied, in order.
    pub audit_trace: AuditTrace,
}
