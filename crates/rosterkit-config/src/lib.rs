//! Configuration system for rosterkit.
//!
//! Load engine policy from TOML or YAML files to control severity
//! classification and workload thresholds without code changes.
//!
//! # Examples
//!
//! Load configuration from a TOML string:
//!
//! ```
//! use rosterkit_config::{EngineConfig, PrimaryResource};
//!
//! let config = EngineConfig::from_toml_str(r#"
//!     [detection]
//!     primary_resource = "class"
//!
//!     [workload]
//!     max_weekly_minutes = 1800
//! "#).unwrap();
//!
//! assert_eq!(config.detection.primary_resource, PrimaryResource::Class);
//! assert_eq!(config.workload.max_weekly_minutes, 1800);
//! ```
//!
//! Use the default policy when a file is missing:
//!
//! ```
//! use rosterkit_config::EngineConfig;
//!
//! let config = EngineConfig::load("rosterkit.toml").unwrap_or_default();
//! // Proceeds with defaults if the file doesn't exist
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use rosterkit_core::ResourceDimension;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// The resource dimension whose double-booking is classified `High`.
///
/// Teaching schedules pick `Teacher`; academic schedules pick `Class`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PrimaryResource {
    /// Teacher double-booking is blocking.
    #[default]
    Teacher,
    /// Class double-booking is blocking.
    Class,
    /// Room double-booking is blocking.
    Room,
}

impl From<PrimaryResource> for ResourceDimension {
    fn from(primary: PrimaryResource) -> Self {
        match primary {
            PrimaryResource::Teacher => ResourceDimension::Teacher,
            PrimaryResource::Class => ResourceDimension::Class,
            PrimaryResource::Room => ResourceDimension::Room,
        }
    }
}

impl From<ResourceDimension> for PrimaryResource {
    fn from(dimension: ResourceDimension) -> Self {
        match dimension {
            ResourceDimension::Teacher => PrimaryResource::Teacher,
            ResourceDimension::Class => PrimaryResource::Class,
            ResourceDimension::Room => PrimaryResource::Room,
        }
    }
}

/// Engine policy configuration.
///
/// Every field has a default, so a partial or empty file is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct EngineConfig {
    /// Severity classification policy.
    #[serde(default)]
    pub detection: DetectionConfig,

    /// Workload thresholds.
    #[serde(default)]
    pub workload: WorkloadConfig,
}

/// Severity classification policy.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct DetectionConfig {
    /// Dimension whose double-booking is classified `High`.
    #[serde(default)]
    pub primary_resource: PrimaryResource,
}

/// Weekly workload thresholds.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct WorkloadConfig {
    /// Minutes per week above which a teacher counts as overloaded.
    #[serde(default = "default_max_weekly_minutes")]
    pub max_weekly_minutes: u32,
}

impl Default for WorkloadConfig {
    fn default() -> Self {
        WorkloadConfig {
            max_weekly_minutes: default_max_weekly_minutes(),
        }
    }
}

// The original application's 40-hour teaching week.
fn default_max_weekly_minutes() -> u32 {
    2_400
}

impl EngineConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a file, dispatching on the extension:
    /// `.yaml`/`.yml` parse as YAML, anything else as TOML.
    ///
    /// # Errors
    ///
    /// Returns an error if the file doesn't exist, fails to parse, or
    /// fails validation.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("yaml") | Some("yml") => Self::from_yaml_file(path),
            _ => Self::from_toml_file(path),
        }
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: EngineConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        let config: EngineConfig = serde_yaml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Sets the primary resource dimension.
    pub fn with_primary_resource(mut self, primary: PrimaryResource) -> Self {
        self.detection.primary_resource = primary;
        self
    }

    /// Sets the weekly overload threshold in minutes.
    pub fn with_max_weekly_minutes(mut self, minutes: u32) -> Self {
        self.workload.max_weekly_minutes = minutes;
        self
    }

    /// Checks cross-field constraints.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.workload.max_weekly_minutes == 0 {
            return Err(ConfigError::Invalid(
                "workload.max_weekly_minutes must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests;
