//! Calculation input model and termination types.
//!
//! This module defines the [`CalculationInput`] record consumed by the
//! engine and the [`TerminationType`] enum that decides whether the
//! severance fund penalty applies.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// How the employment relationship ended.
///
/// Serializes as a snake_case identifier. Deserializes through [`FromStr`],
/// so identifiers and the Portuguese form labels used by practitioners are
/// both accepted, ignoring case and surrounding whitespace.
///
/// # Example
///
/// ```
/// use severance_engine::models::TerminationType;
///
/// let parsed: TerminationType = "Pedido de Demissão".parse().unwrap();
/// assert_eq!(parsed, TerminationType::EmployeeResignation);
/// assert_eq!(parsed.as_str(), "employee_resignation");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", try_from = "String")]
pub enum TerminationType {
    /// Dismissal by the employer without cause ("Sem Justa Causa").
    /// The severance fund penalty applies.
    #[default]
    WithoutCause,
    /// Resignation by the employee ("Pedido de Demissão").
    EmployeeResignation,
    /// Dismissal by the employer with cause ("Com Justa Causa").
    WithCause,
}

impl TerminationType {
    /// All termination types, in form order.
    pub const ALL: [TerminationType; 3] = [
        TerminationType::WithoutCause,
        TerminationType::EmployeeResignation,
        TerminationType::WithCause,
    ];

    /// The snake_case identifier used on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            TerminationType::WithoutCause => "without_cause",
            TerminationType::EmployeeResignation => "employee_resignation",
            TerminationType::WithCause => "with_cause",
        }
    }

    /// The Portuguese form label.
    pub fn label(&self) -> &'static str {
        match self {
            TerminationType::WithoutCause => "Sem Justa Causa",
            TerminationType::EmployeeResignation => "Pedido de Demissão",
            TerminationType::WithCause => "Com Justa Causa",
        }
    }

    /// Returns true when the severance fund penalty applies.
    pub fn is_without_cause(&self) -> bool {
        *self == TerminationType::WithoutCause
    }
}

impl fmt::Display for TerminationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TerminationType {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        TerminationType::ALL
            .into_iter()
            .find(|t| {
                t.as_str().eq_ignore_ascii_case(needle)
                    || t.label().to_lowercase() == needle.to_lowercase()
            })
            .ok_or_else(|| {
                EngineError::invalid_input(
                    "termination_type",
                    format!("unknown termination type '{}'", s),
                )
            })
    }
}

impl TryFrom<String> for TerminationType {
    type Error = EngineError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Employment parameters for a single severance calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationInput {
    /// Monthly gross salary. Must be greater than zero.
    pub base_salary: Decimal,
    /// Hours billed at the 50% premium.
    #[serde(default)]
    pub overtime_hours_50: Decimal,
    /// Hours billed at the 100% premium.
    #[serde(default)]
    pub overtime_hours_100: Decimal,
    /// Proportional months of service for the 13th salary, vacation and
    /// severance fund.
    pub months_worked: Decimal,
    /// How the employment ended.
    #[serde(default)]
    pub termination_type: TerminationType,
}

impl CalculationInput {
    /// Creates an input with no overtime.
    pub fn new(
        base_salary: Decimal,
        months_worked: Decimal,
        termination_type: TerminationType,
    ) -> Self {
        Self {
            base_salary,
            overtime_hours_50: Decimal::ZERO,
            overtime_hours_100: Decimal::ZERO,
            months_worked,
            termination_type,
        }
    }

    /// Sets the overtime hour counts.
    pub fn with_overtime(mut self, hours_50: Decimal, hours_100: Decimal) -> Self {
        self.overtime_hours_50 = hours_50;
        self.overtime_hours_100 = hours_100;
        self
    }

    /// Builds an input from binary floats, as produced by numeric form
    /// fields. NaN and infinities are rejected with `InvalidInput`.
    ///
    /// # Example
    ///
    /// ```
    /// use severance_engine::models::{CalculationInput, TerminationType};
    ///
    /// let err = CalculationInput::from_f64(f64::NAN, 0.0, 0.0, 12.0, TerminationType::WithCause);
    /// assert!(err.is_err());
    /// ```
    pub fn from_f64(
        base_salary: f64,
        overtime_hours_50: f64,
        overtime_hours_100: f64,
        months_worked: f64,
        termination_type: TerminationType,
    ) -> EngineResult<Self> {
        Ok(Self {
            base_salary: finite_decimal("base_salary", base_salary)?,
            overtime_hours_50: finite_decimal("overtime_hours_50", overtime_hours_50)?,
            overtime_hours_100: finite_decimal("overtime_hours_100", overtime_hours_100)?,
            months_worked: finite_decimal("months_worked", months_worked)?,
            termination_type,
        })
    }
}

fn finite_decimal(field: &str, value: f64) -> EngineResult<Decimal> {
    if !value.is_finite() {
        return Err(EngineError::invalid_input(
            field,
            format!("must be a finite number, got {}", value),
        ));
    }
    Decimal::from_f64(value).ok_or_else(|| {
        EngineError::invalid_input(field, format!("{} is outside the decimal range", value))
    })
}
