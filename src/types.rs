//! Type definitions for medicare_signup
//!
//! Shared configuration models and startup errors used throughout the crate.

use std::time::Duration;
use thiserror::Error;

/// Configuration errors
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value}")]
    InvalidValue {
        key: String,
        value: String,
    },

    #[error("Configuration error: {0}")]
    Invalid(String),
}

/// Complete signup configuration
#[derive(Debug, Clone, PartialEq)]
pub struct SignupConfig {
    /// Clinic name used in the welcome message
    pub clinic_name: String,
    /// Artificial delay of the simulated gateway
    pub submit_delay: Duration,
    /// How long error banners stay visible
    pub error_dismiss_after: Duration,
    /// Delay before the UI navigates to the login page
    pub redirect_delay: Duration,
    pub login_url: String,
}

impl Default for SignupConfig {
    fn default() -> Self {
        Self {
            clinic_name: "MediCare".to_string(),
            submit_delay: Duration::from_millis(2000),
            error_dismiss_after: Duration::from_millis(6000),
            redirect_delay: Duration::from_millis(2000),
            login_url: "login.html".to_string(),
        }
    }
}
