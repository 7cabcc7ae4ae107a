//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading statutory
//! calculation parameters from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{CalculatorConfig, ParameterConfig, RegimeMetadata};

/// Loads and provides access to calculator configuration.
///
/// The `ConfigLoader` reads YAML configuration files from a directory
/// and validates them into a [`CalculatorConfig`].
///
/// # Directory Structure
///
/// ```text
/// config/clt/
/// ├── regime.yaml      # Regime metadata
/// └── parameters.yaml  # Hour base, premiums, vacation bonus, fund rates
/// ```
///
/// # Example
///
/// ```no_run
/// use severance_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/clt").unwrap();
/// println!("Loaded regime: {}", loader.regime().name);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: CalculatorConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing (`ConfigNotFound`)
    /// - Any file contains invalid YAML or misses a field (`ConfigParseError`)
    /// - A base, divisor, multiplier or rate is not positive (`InvalidConfig`)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let regime = Self::load_yaml::<RegimeMetadata>(&path.join("regime.yaml"))?;
        let parameters = Self::load_yaml::<ParameterConfig>(&path.join("parameters.yaml"))?;

        let config = CalculatorConfig::new(regime, parameters)?;

        Ok(Self { config })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the loaded calculator configuration.
    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    /// Consumes the loader, returning the configuration.
    pub fn into_config(self) -> CalculatorConfig {
        self.config
    }

    /// Returns the regime metadata.
    pub fn regime(&self) -> &RegimeMetadata {
        self.config.regime()
    }
}
