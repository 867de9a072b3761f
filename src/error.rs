//! Error types and handling for the `TripPlan` library

use thiserror::Error;

/// Main error type for the `TripPlan` library
#[derive(Error, Debug)]
pub enum TripPlanError {
    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Generative endpoint communication errors
    #[error("API error: {message}")]
    Api { message: String },

    /// Input validation errors
    #[error("Invalid input: {message}")]
    Validation { message: String },

    /// Generated text could not be parsed into structured data
    #[error("Parse error: {message}")]
    Parse { message: String },

    /// I/O operation errors
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    /// General application errors
    #[error("Application error: {message}")]
    General { message: String },
}

impl TripPlanError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new API error
    pub fn api<S: Into<String>>(message: S) -> Self {
        Self::Api {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a new parse error
    pub fn parse<S: Into<String>>(message: S) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }

    /// Create a new general error
    pub fn general<S: Into<String>>(message: S) -> Self {
        Self::General {
            message: message.into(),
        }
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            TripPlanError::Config { .. } => {
                "Configuration error. Please check your config file and API key.".to_string()
            }
            TripPlanError::Api { .. } => {
                "Unable to reach the itinerary service. Please check your internet connection."
                    .to_string()
            }
            TripPlanError::Validation { message } => {
                format!("Invalid input: {message}")
            }
            TripPlanError::Parse { .. } => {
                "The itinerary service returned an unexpected response.".to_string()
            }
            TripPlanError::Io { .. } => {
                "File operation failed. Please check file permissions.".to_string()
            }
            TripPlanError::General { message } => message.clone(),
        }
    }
}
