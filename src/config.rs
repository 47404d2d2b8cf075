//! Solver configuration.
//!
//! Load solver settings from TOML to choose the start location and bound the
//! instance size without code changes.
//!
//! # Examples
//!
//! ```
//! use u_atsp::config::SolverConfig;
//!
//! let config = SolverConfig::from_toml_str(r#"
//!     start = 2
//!     max_locations = 12
//!     warn_on_symmetric = false
//! "#).unwrap();
//!
//! assert_eq!(config.start, 2);
//! assert_eq!(config.max_locations, 12);
//! assert!(!config.warn_on_symmetric);
//! ```
//!
//! Use default config when file is missing:
//!
//! ```
//! use u_atsp::config::SolverConfig;
//!
//! let config = SolverConfig::load("atsp.toml").unwrap_or_default();
//! assert_eq!(config.start, 0);
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::exact::HeldKarp;

/// Settings shared by the exact solvers.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "snake_case")]
pub struct SolverConfig {
    /// Index of the location where the tour starts and ends.
    pub start: usize,

    /// Largest number of locations accepted before solving is refused.
    pub max_locations: usize,

    /// Log a warning for each pair of locations with equal costs both ways.
    pub warn_on_symmetric: bool,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            start: 0,
            max_locations: 20,
            warn_on_symmetric: true,
        }
    }
}

impl SolverConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if the file doesn't exist, contains invalid TOML, or
    /// fails [`validate`](Self::validate).
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_file(path)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses and validates configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Sets the start location.
    pub fn with_start(mut self, start: usize) -> Self {
        self.start = start;
        self
    }

    /// Sets the instance size limit.
    pub fn with_max_locations(mut self, max_locations: usize) -> Self {
        self.max_locations = max_locations;
        self
    }

    /// Disables the per-pair symmetry warnings.
    pub fn without_symmetry_warnings(mut self) -> Self {
        self.warn_on_symmetric = false;
        self
    }

    /// Checks that the size limit is usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_locations == 0 {
            return Err(ConfigError::Invalid(
                "max_locations must be at least 1".to_string(),
            ));
        }
        if self.max_locations > HeldKarp::MAX_LOCATIONS {
            return Err(ConfigError::Invalid(format!(
                "max_locations {} exceeds the supported maximum of {}",
                self.max_locations,
                HeldKarp::MAX_LOCATIONS
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = SolverConfig::default();
        assert_eq!(config.start, 0);
        assert_eq!(config.max_locations, 20);
        assert!(config.warn_on_symmetric);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml() {
        let config = SolverConfig::from_toml_str("start = 3").unwrap();
        assert_eq!(config.start, 3);
        assert_eq!(config.max_locations, 20);
        assert!(config.warn_on_symmetric);
    }

    #[test]
    fn test_empty_toml() {
        let config = SolverConfig::from_toml_str("").unwrap();
        assert_eq!(config, SolverConfig::default());
    }

    #[test]
    fn test_invalid_toml() {
        let err = SolverConfig::from_toml_str("start = \"north\"").unwrap_err();
        assert!(matches!(err, ConfigError::Toml(_)));
    }

    #[test]
    fn test_invalid_limits() {
        let err = SolverConfig::from_toml_str("max_locations = 0").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));

        let err = SolverConfig::from_toml_str("max_locations = 64").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_builder() {
        let config = SolverConfig::new()
            .with_start(1)
            .with_max_locations(8)
            .without_symmetry_warnings();
        assert_eq!(config.start, 1);
        assert_eq!(config.max_locations, 8);
        assert!(!config.warn_on_symmetric);
    }

    #[test]
    fn test_load_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("atsp.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "start = 1\nmax_locations = 10").unwrap();

        let config = SolverConfig::load(&path).unwrap();
        assert_eq!(config.start, 1);
        assert_eq!(config.max_locations, 10);
    }

    #[test]
    fn test_load_missing_file() {
        let err = SolverConfig::load("/nonexistent/atsp.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
