//! Configuration management for the importer
//!
//! Supports loading configuration from:
//! - YAML files (`config/default.yaml`, `config/{env}.yaml`)
//! - Environment variables (TRANSPORTE__ prefix)
//!
//! # Region knowledge base
//!
//! The geographic keyword tables used to route customers to drivers are
//! compiled in and live under [`domain::regions`]. They are not read from
//! configuration files.

pub mod domain;
pub mod settings;

pub use domain::{
    knowledge_base, ProximityEntry, RegionKnowledgeBase, RegionProfile, CENTRAL_CLINIC_REGION,
    CENTRAL_MARKER,
};
pub use settings::{
    load_settings, load_settings_from, ObservabilityConfig, OutputConfig, OutputFormat,
    RuntimeEnvironment, SchedulingConfig, Settings,
};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },
}

impl From<config::ConfigError> for ConfigError {
    fn from(err: config::ConfigError) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}
