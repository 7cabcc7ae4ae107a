//! Severance & Labor-Cost Calculation Engine
//!
//! This crate computes the amounts owed to an employee on termination or
//! periodic settlement under Brazilian labor rules: overtime premiums, the
//! proportional 13th salary, vacation pay with its one-third bonus, and the
//! severance fund (FGTS) contribution with the without-cause penalty.
//!
//! # Example
//!
//! ```
//! use severance_engine::calculation::compute;
//! use severance_engine::models::{CalculationInput, TerminationType};
//! use rust_decimal::Decimal;
//!
//! let input = CalculationInput::new(
//!     Decimal::from(5450),
//!     Decimal::from(12),
//!     TerminationType::WithoutCause,
//! );
//! let result = compute(&input).unwrap();
//! assert_eq!(result.rounded_to_cents().total.to_string(), "20041.47");
//! ```

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
