//! Request types for the Severance Engine API.
//!
//! This module defines the JSON request structures for the `/calculate` endpoint.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::{CalculationInput, EmploymentPeriod, TerminationType};

/// Request body for the `/calculate` endpoint.
///
/// Service length is given either directly as `months_worked` or as an
/// `employment_period`, never both.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// Monthly gross salary.
    pub base_salary: Decimal,
    /// Hours at the 50% premium.
    #[serde(default)]
    pub overtime_hours_50: Decimal,
    /// Hours at the 100% premium.
    #[serde(default)]
    pub overtime_hours_100: Decimal,
    /// Proportional months of service.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub months_worked: Option<Decimal>,
    /// Admission and dismissal dates to derive months of service from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employment_period: Option<EmploymentPeriod>,
    /// How the employment ended, as an identifier or form label. Defaults
    /// to dismissal without cause.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub termination_type: Option<String>,
    /// Display metadata echoed back for document rendering.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub practice: Option<PracticeProfile>,
}

/// The law practice issuing the calculation, as printed on exported
/// documents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PracticeProfile {
    /// Practice name.
    pub name: String,
    /// Bar registration number.
    #[serde(default)]
    pub registration_number: String,
    /// Postal address.
    #[serde(default)]
    pub address: String,
    /// Contact email.
    #[serde(default)]
    pub email: String,
}

impl CalculationRequest {
    /// Resolves months of service from whichever source the request gave.
    ///
    /// # Errors
    ///
    /// `InvalidInput` on field `months_worked` when both or neither source is
    /// present, or on `dismissal_date` when the period is inverted.
    pub fn resolve_months_worked(&self) -> EngineResult<Decimal> {
        match (self.months_worked, &self.employment_period) {
            (Some(months), None) => Ok(months),
            (None, Some(period)) => {
                period.validate()?;
                Ok(period.months_worked())
            }
            (Some(_), Some(_)) => Err(EngineError::invalid_input(
                "months_worked",
                "provide either months_worked or employment_period, not both",
            )),
            (None, None) => Err(EngineError::invalid_input(
                "months_worked",
                "one of months_worked or employment_period is required",
            )),
        }
    }

    /// Parses the termination type, defaulting to dismissal without cause.
    ///
    /// # Errors
    ///
    /// `InvalidInput` on field `termination_type` for an unknown label.
    pub fn resolve_termination_type(&self) -> EngineResult<TerminationType> {
        match self.termination_type.as_deref() {
            Some(label) => label.parse(),
            None => Ok(TerminationType::default()),
        }
    }

    /// Converts the request into an engine input.
    pub fn to_input(&self) -> EngineResult<CalculationInput> {
        let months_worked = self.resolve_months_worked()?;
        let termination_type = self.resolve_termination_type()?;
        Ok(
            CalculationInput::new(self.base_salary, months_worked, termination_type)
                .with_overtime(self.overtime_hours_50, self.overtime_hours_100),
        )
    }
}
