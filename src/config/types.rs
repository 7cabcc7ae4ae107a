//! Configuration types for severance calculation.
//!
//! This module contains the strongly-typed parameter structures that are
//! deserialized from YAML configuration files, together with the statutory
//! defaults used when no parameter directory is supplied.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Metadata about the labor regime the parameters come from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegimeMetadata {
    /// Short code of the regime (e.g., "CLT").
    pub code: String,
    /// The human-readable name of the regime.
    pub name: String,
    /// The version or effective year of the parameter set.
    pub version: String,
    /// URL to the official legislation.
    pub source_url: String,
}

/// Overtime premium multipliers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OvertimeParameters {
    /// Reference to the legal provision for overtime premiums.
    pub clause: String,
    /// Multiplier for hours at the 50% premium (1.5).
    pub premium_50: Decimal,
    /// Multiplier for hours at the 100% premium (2.0).
    pub premium_100: Decimal,
}

/// Proportional 13th salary parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThirteenthSalaryParameters {
    /// Reference to the legal provision for the 13th salary.
    pub clause: String,
}

/// Vacation pay parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VacationParameters {
    /// Reference to the legal provision for the vacation bonus.
    pub clause: String,
    /// The vacation bonus is `1 / bonus_divisor` of the base vacation pay.
    /// A divisor of 3 is the constitutional one-third.
    pub bonus_divisor: Decimal,
}

/// Severance fund (FGTS) parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeveranceFundParameters {
    /// Reference to the legal provisions for the contribution and penalty.
    pub clause: String,
    /// Monthly contribution as a fraction of salary (0.08).
    pub contribution_rate: Decimal,
    /// Multiplier applied on termination without cause (1.4, i.e. the
    /// contribution plus the 40% penalty).
    pub without_cause_multiplier: Decimal,
}

/// Formula parameters from `parameters.yaml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterConfig {
    /// Monthly hour base used to derive the hourly rate (220).
    pub monthly_hour_base: Decimal,
    /// Reference to the legal provision for the monthly hour base.
    pub hourly_rate_clause: String,
    /// Number of months in the accrual year (12).
    pub months_per_year: Decimal,
    /// Overtime parameters.
    pub overtime: OvertimeParameters,
    /// 13th salary parameters.
    pub thirteenth_salary: ThirteenthSalaryParameters,
    /// Vacation parameters.
    pub vacation: VacationParameters,
    /// Severance fund parameters.
    pub severance_fund: SeveranceFundParameters,
}

/// The complete, validated calculator configuration.
///
/// Fields are private so that every instance has passed validation: the
/// formulas divide by the hour base, the months per year and the vacation
/// bonus divisor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalculatorConfig {
    regime: RegimeMetadata,
    parameters: ParameterConfig,
}

impl CalculatorConfig {
    /// Creates a configuration from its parts, rejecting non-positive
    /// bases, divisors, multipliers and rates.
    pub fn new(regime: RegimeMetadata, parameters: ParameterConfig) -> EngineResult<Self> {
        let checks = [
            ("monthly_hour_base", parameters.monthly_hour_base),
            ("months_per_year", parameters.months_per_year),
            ("overtime.premium_50", parameters.overtime.premium_50),
            ("overtime.premium_100", parameters.overtime.premium_100),
            ("vacation.bonus_divisor", parameters.vacation.bonus_divisor),
            (
                "severance_fund.contribution_rate",
                parameters.severance_fund.contribution_rate,
            ),
            (
                "severance_fund.without_cause_multiplier",
                parameters.severance_fund.without_cause_multiplier,
            ),
        ];

        for (field, value) in checks {
            if value <= Decimal::ZERO {
                return Err(EngineError::InvalidConfig {
                    field: field.to_string(),
                    message: format!("must be greater than zero, got {}", value),
                });
            }
        }

        Ok(Self { regime, parameters })
    }

    /// The statutory CLT parameter set.
    pub fn statutory() -> Self {
        Self {
            regime: RegimeMetadata {
                code: "CLT".to_string(),
                name: "Consolidação das Leis do Trabalho".to_string(),
                version: "2024".to_string(),
                source_url: "https://www.planalto.gov.br/ccivil_03/decreto-lei/del5452.htm"
                    .to_string(),
            },
            parameters: ParameterConfig {
                monthly_hour_base: Decimal::from(220),
                hourly_rate_clause: "CLT art. 64".to_string(),
                months_per_year: Decimal::from(12),
                overtime: OvertimeParameters {
                    clause: "CF art. 7 XVI; CLT art. 59 §1".to_string(),
                    premium_50: Decimal::new(15, 1),
                    premium_100: Decimal::new(20, 1),
                },
                thirteenth_salary: ThirteenthSalaryParameters {
                    clause: "Lei 4.090/1962 art. 1 §2".to_string(),
                },
                vacation: VacationParameters {
                    clause: "CF art. 7 XVII; CLT art. 146".to_string(),
                    bonus_divisor: Decimal::from(3),
                },
                severance_fund: SeveranceFundParameters {
                    clause: "Lei 8.036/1990 art. 15; art. 18 §1".to_string(),
                    contribution_rate: Decimal::new(8, 2),
                    without_cause_multiplier: Decimal::new(14, 1),
                },
            },
        }
    }

    /// Returns the regime metadata.
    pub fn regime(&self) -> &RegimeMetadata {
        &self.regime
    }

    /// Returns the formula parameters.
    pub fn parameters(&self) -> &ParameterConfig {
        &self.parameters
    }

    /// Multiplier applied to base vacation pay: `1 + 1 / bonus_divisor`,
    /// expressed as a numerator/denominator pair so callers can multiply
    /// before dividing.
    pub fn vacation_factor(&self) -> (Decimal, Decimal) {
        let divisor = self.parameters.vacation.bonus_divisor;
        (divisor + Decimal::ONE, divisor)
    }
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self::statutory()
    }
}
