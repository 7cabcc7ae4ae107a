//! Application state for the Severance Engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::CalculatorConfig;

/// Shared application state.
///
/// Holds the immutable calculator configuration shared by all handlers.
#[derive(Clone)]
pub struct AppState {
    config: Arc<CalculatorConfig>,
}

impl AppState {
    /// Creates a new application state with the given configuration.
    pub fn new(config: CalculatorConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Returns a reference to the calculator configuration.
    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(CalculatorConfig::statutory())
    }
}
