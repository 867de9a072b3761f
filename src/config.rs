//! Configuration management for the `TripPlan` library
//!
//! Handles loading configuration from files and environment variables,
//! and provides validation for all configuration settings. The generative
//! endpoint credential is always sourced from here, never embedded in code.

use crate::TripPlanError;
use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure for the `TripPlan` library
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TripPlanConfig {
    /// Generative-language API configuration
    #[serde(default)]
    pub ai: AiConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Default application settings
    #[serde(default)]
    pub defaults: DefaultsConfig,
}

/// Generative-language API settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AiConfig {
    /// API key for the generative endpoint
    pub api_key: Option<String>,
    /// Base URL for the generative endpoint
    #[serde(default = "default_ai_base_url")]
    pub base_url: String,
    /// Model identifier appended to the endpoint path
    #[serde(default = "default_ai_model")]
    pub model: String,
    /// Request timeout in seconds
    #[serde(default = "default_ai_timeout")]
    pub timeout_seconds: u32,
}

/// Logging configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log format (pretty or json)
    #[serde(default = "default_log_format")]
    pub format: String,
}

/// Default application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// Transport mode profile used when none is given
    #[serde(default = "default_transport_mode")]
    pub transport_mode: String,
    /// Maximum number of waypoints accepted per route
    #[serde(default = "default_max_waypoints")]
    pub max_waypoints: u32,
}

// Default value functions
fn default_ai_base_url() -> String {
    "https://generativelanguage.googleapis.com/v1beta".to_string()
}

fn default_ai_model() -> String {
    "gemini-1.5-flash".to_string()
}

fn default_ai_timeout() -> u32 {
    30
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

fn default_transport_mode() -> String {
    "driving".to_string()
}

fn default_max_waypoints() -> u32 {
    25
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_ai_base_url(),
            model: default_ai_model(),
            timeout_seconds: default_ai_timeout(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            transport_mode: default_transport_mode(),
            max_waypoints: default_max_waypoints(),
        }
    }
}

impl Default for TripPlanConfig {
    fn default() -> Self {
        Self {
            ai: AiConfig::default(),
            logging: LoggingConfig::default(),
            defaults: DefaultsConfig::default(),
        }
    }
}

impl TripPlanConfig {
    /// Load configuration from file and environment variables
    pub fn load() -> Result<Self> {
        Self::load_from_path(None)
    }

    /// Load configuration from specified path
    pub fn load_from_path(config_path: Option<PathBuf>) -> Result<Self> {
        let mut builder = Config::builder();

        // Load from file if path is provided or use default location
        let config_file = config_path.unwrap_or_else(|| {
            Self::get_config_path().unwrap_or_else(|| PathBuf::from("config.toml"))
        });

        if config_file.exists() {
            builder = builder.add_source(
                File::from(config_file.clone())
                    .required(false)
                    .format(config::FileFormat::Toml),
            );
        }

        // Add environment variable overrides with TRIPPLAN_ prefix,
        // e.g. TRIPPLAN_AI__API_KEY for ai.api_key
        builder = builder.add_source(
            Environment::with_prefix("TRIPPLAN")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .with_context(|| "Failed to build configuration")?;

        let config: TripPlanConfig = settings
            .try_deserialize()
            .with_context(|| "Failed to deserialize configuration")?;

        config.validate()?;

        Ok(config)
    }

    /// Get the default configuration file path
    #[must_use]
    pub fn get_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("tripplan").join("config.toml"))
    }

    /// Validate all configuration settings
    pub fn validate(&self) -> Result<()> {
        self.validate_api_key()?;
        self.validate_ranges()?;
        self.validate_strings()?;
        Ok(())
    }

    /// Validate the generative endpoint credential
    fn validate_api_key(&self) -> Result<()> {
        if let Some(api_key) = &self.ai.api_key {
            if api_key.is_empty() {
                return Err(TripPlanError::config(
                    "AI API key cannot be empty if provided. Either remove it or provide a valid key.",
                )
                .into());
            }

            if api_key.len() < 8 {
                return Err(TripPlanError::config(
                    "AI API key appears to be invalid (too short). Please check your API key.",
                )
                .into());
            }
        }

        Ok(())
    }

    /// Validate numeric configuration ranges
    fn validate_ranges(&self) -> Result<()> {
        if self.ai.timeout_seconds == 0 || self.ai.timeout_seconds > 300 {
            return Err(
                TripPlanError::config("AI request timeout must be between 1 and 300 seconds")
                    .into(),
            );
        }

        if self.defaults.max_waypoints < 2 || self.defaults.max_waypoints > 100 {
            return Err(
                TripPlanError::config("Maximum waypoints must be between 2 and 100").into(),
            );
        }

        Ok(())
    }

    /// Validate string configuration values
    fn validate_strings(&self) -> Result<()> {
        let valid_log_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_log_levels.contains(&self.logging.level.as_str()) {
            return Err(TripPlanError::config(format!(
                "Invalid log level '{}'. Must be one of: {}",
                self.logging.level,
                valid_log_levels.join(", ")
            ))
            .into());
        }

        let valid_log_formats = ["pretty", "json"];
        if !valid_log_formats.contains(&self.logging.format.as_str()) {
            return Err(TripPlanError::config(format!(
                "Invalid log format '{}'. Must be one of: {}",
                self.logging.format,
                valid_log_formats.join(", ")
            ))
            .into());
        }

        if !self.ai.base_url.starts_with("http://") && !self.ai.base_url.starts_with("https://") {
            return Err(
                TripPlanError::config("AI base URL must be a valid HTTP or HTTPS URL").into(),
            );
        }

        if self.ai.model.is_empty() {
            return Err(TripPlanError::config("AI model identifier cannot be empty").into());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TripPlanConfig::default();
        assert_eq!(
            config.ai.base_url,
            "https://generativelanguage.googleapis.com/v1beta"
        );
        assert_eq!(config.ai.model, "gemini-1.5-flash");
        assert_eq!(config.ai.timeout_seconds, 30);
        assert!(config.ai.api_key.is_none());
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.defaults.transport_mode, "driving");
    }

    #[test]
    fn test_default_config_is_valid() {
        let config = TripPlanConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_rejects_empty_api_key() {
        let mut config = TripPlanConfig::default();
        config.ai.api_key = Some(String::new());
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("cannot be empty"));
    }

    #[test]
    fn test_validation_rejects_short_api_key() {
        let mut config = TripPlanConfig::default();
        config.ai.api_key = Some("short".to_string());
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_accepts_plausible_api_key() {
        let mut config = TripPlanConfig::default();
        config.ai.api_key = Some("valid_api_key_123".to_string());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_rejects_invalid_log_level() {
        let mut config = TripPlanConfig::default();
        config.logging.level = "invalid".to_string();
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Invalid log level"));
    }

    #[test]
    fn test_validation_rejects_timeout_out_of_range() {
        let mut config = TripPlanConfig::default();
        config.ai.timeout_seconds = 500;
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("timeout"));
    }

    #[test]
    fn test_validation_rejects_non_http_base_url() {
        let mut config = TripPlanConfig::default();
        config.ai.base_url = "ftp://example.com".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_path_generation() {
        let path = TripPlanConfig::get_config_path();
        assert!(path.is_some());
        let path = path.unwrap();
        assert!(path.to_string_lossy().contains("tripplan"));
        assert!(path.to_string_lossy().contains("config.toml"));
    }
}
