//! Configuration loading and management for the Severance Engine.
//!
//! This module provides the statutory parameters the formulas use (monthly
//! hour base, overtime premiums, vacation bonus, severance fund rates) and
//! loads overrides from YAML files.
//!
//! # Example
//!
//! ```no_run
//! use severance_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/clt").unwrap();
//! println!("Loaded regime: {}", config.regime().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    CalculatorConfig, OvertimeParameters, ParameterConfig, RegimeMetadata,
    SeveranceFundParameters, ThirteenthSalaryParameters, VacationParameters,
};
