//! Core data models for the Severance Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod calculation_input;
mod calculation_result;
mod employment_period;

pub use calculation_input::{CalculationInput, TerminationType};
pub use calculation_result::{
    AuditStep, AuditTrace, AuditWarning, CURRENCY_DECIMAL_PLACES, CalculationResult,
    SeveranceCalculation, round_to_cents,
};
pub use employment_period::{EmploymentPeriod, MINIMUM_DAYS_FOR_MONTH};
