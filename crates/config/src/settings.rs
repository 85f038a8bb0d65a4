//! Main settings module

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::ConfigError;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Runtime environment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RuntimeEnvironment {
    #[default]
    Development,
    Staging,
    Production,
}

impl RuntimeEnvironment {
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

/// Main application settings
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Settings {
    #[serde(default)]
    pub environment: RuntimeEnvironment,

    #[serde(default)]
    pub observability: ObservabilityConfig,

    #[serde(default)]
    pub scheduling: SchedulingConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Settings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate settings
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_observability()?;
        self.validate_scheduling()?;
        Ok(())
    }

    fn validate_observability(&self) -> Result<(), ConfigError> {
        let level = self.observability.log_level.to_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(ConfigError::InvalidValue {
                field: "observability.log_level".to_string(),
                message: format!(
                    "Unknown log level '{}' (expected one of {})",
                    self.observability.log_level,
                    LOG_LEVELS.join(", ")
                ),
            });
        }
        Ok(())
    }

    fn validate_scheduling(&self) -> Result<(), ConfigError> {
        if self.scheduling.default_hour > 23 {
            return Err(ConfigError::InvalidValue {
                field: "scheduling.default_hour".to_string(),
                message: "Hour must be between 0 and 23".to_string(),
            });
        }

        if self.scheduling.default_minute > 59 {
            return Err(ConfigError::InvalidValue {
                field: "scheduling.default_minute".to_string(),
                message: "Minute must be between 0 and 59".to_string(),
            });
        }

        Ok(())
    }
}

/// Observability configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Enable JSON logging
    #[serde(default)]
    pub log_json: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_json: false,
        }
    }
}

/// Appointment scheduling configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchedulingConfig {
    /// Hour used when the customer's preferred time can't be parsed
    #[serde(default = "default_hour")]
    pub default_hour: u32,

    #[serde(default)]
    pub default_minute: u32,
}

fn default_hour() -> u32 {
    9
}

impl Default for SchedulingConfig {
    fn default() -> Self {
        Self {
            default_hour: default_hour(),
            default_minute: 0,
        }
    }
}

/// How the importer binary prints a processed batch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Full batch report as JSON
    #[default]
    Json,
    /// One driver roster message per detected region
    Roster,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

/// Load settings from `config/` and the environment
///
/// Priority (highest to lowest):
/// 1. Environment variables (TRANSPORTE__ prefix, `__` separator)
/// 2. config/{env}.yaml (if env specified)
/// 3. config/default.yaml
pub fn load_settings(env: Option<&str>) -> Result<Settings, ConfigError> {
    load_settings_from("config", env)
}

/// Same as [`load_settings`] with an explicit configuration directory
pub fn load_settings_from<P: AsRef<Path>>(
    config_dir: P,
    env: Option<&str>,
) -> Result<Settings, ConfigError> {
    let dir = config_dir.as_ref();
    let mut builder = Config::builder();

    builder = builder
        .add_source(File::with_name(&dir.join("default").to_string_lossy()).required(false));

    if let Some(env_name) = env {
        builder = builder
            .add_source(File::with_name(&dir.join(env_name).to_string_lossy()).required(false));
    }

    builder = builder.add_source(
        Environment::with_prefix("TRANSPORTE")
            .separator("__")
            .try_parsing(true),
    );

    let config = builder.build()?;
    let settings: Settings = config.try_deserialize()?;

    settings.validate()?;

    tracing::debug!(
        config_dir = %dir.display(),
        environment = ?settings.environment,
        "Settings loaded"
    );

    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.observability.log_level, "info");
        assert_eq!(settings.scheduling.default_hour, 9);
        assert_eq!(settings.scheduling.default_minute, 0);
        assert_eq!(settings.output.format, OutputFormat::Json);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_scheduling_validation() {
        let mut settings = Settings::default();

        settings.scheduling.default_hour = 24;
        assert!(settings.validate_scheduling().is_err());
        settings.scheduling.default_hour = 23;
        assert!(settings.validate_scheduling().is_ok());

        settings.scheduling.default_minute = 60;
        assert!(settings.validate_scheduling().is_err());
        settings.scheduling.default_minute = 59;
        assert!(settings.validate_scheduling().is_ok());
    }

    #[test]
    fn test_log_level_validation() {
        let mut settings = Settings::default();
        settings.observability.log_level = "verbose".to_string();
        assert!(settings.validate().is_err());

        settings.observability.log_level = "DEBUG".to_string();
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_load_from_directory() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("default.yaml"),
            "observability:\n  log_level: debug\nscheduling:\n  default_hour: 8\n",
        )
        .unwrap();
        fs::write(
            dir.path().join("production.yaml"),
            "environment: production\noutput:\n  format: roster\n",
        )
        .unwrap();

        let settings = load_settings_from(dir.path(), Some("production")).unwrap();
        assert_eq!(settings.observability.log_level, "debug");
        assert_eq!(settings.scheduling.default_hour, 8);
        assert_eq!(settings.scheduling.default_minute, 0);
        assert!(settings.environment.is_production());
        assert_eq!(settings.output.format, OutputFormat::Roster);
    }

    #[test]
    fn test_missing_files_fall_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = load_settings_from(dir.path(), Some("staging")).unwrap();
        assert_eq!(settings.scheduling.default_hour, 9);
        assert_eq!(settings.environment, RuntimeEnvironment::Development);
    }

    #[test]
    fn test_invalid_file_value_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("default.yaml"),
            "scheduling:\n  default_minute: 75\n",
        )
        .unwrap();

        let err = load_settings_from(dir.path(), None).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
    }
}
