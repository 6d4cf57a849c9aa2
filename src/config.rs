use crate::types::{ConfigError, SignupConfig};
use std::env;
use std::time::Duration;

pub const SUBMIT_DELAY_VAR: &str = "SIGNUP_SUBMIT_DELAY_MS";
pub const ERROR_DISMISS_VAR: &str = "SIGNUP_ERROR_DISMISS_MS";
pub const REDIRECT_DELAY_VAR: &str = "SIGNUP_REDIRECT_DELAY_MS";
pub const LOGIN_URL_VAR: &str = "SIGNUP_LOGIN_URL";
pub const CLINIC_NAME_VAR: &str = "SIGNUP_CLINIC_NAME";

/// Load the configuration from the process environment
pub fn load_config() -> Result<SignupConfig, ConfigError> {
    load_config_from(|key| env::var(key).ok())
}

/// Load the configuration from any key lookup, falling back to defaults
pub fn load_config_from<F>(lookup: F) -> Result<SignupConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let defaults = SignupConfig::default();

    // 1. Load the timings
    let submit_delay = millis(&lookup, SUBMIT_DELAY_VAR)?.unwrap_or(defaults.submit_delay);
    let error_dismiss_after =
        millis(&lookup, ERROR_DISMISS_VAR)?.unwrap_or(defaults.error_dismiss_after);
    let redirect_delay = millis(&lookup, REDIRECT_DELAY_VAR)?.unwrap_or(defaults.redirect_delay);

    // 2. Create the final config
    let config = SignupConfig {
        clinic_name: lookup(CLINIC_NAME_VAR).unwrap_or(defaults.clinic_name),
        submit_delay,
        error_dismiss_after,
        redirect_delay,
        login_url: lookup(LOGIN_URL_VAR).unwrap_or(defaults.login_url),
    };

    // 3. Validate the config
    validate_config(&config)?;

    Ok(config)
}

fn millis<F>(lookup: &F, key: &str) -> Result<Option<Duration>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse::<u64>().map(|ms| Some(Duration::from_millis(ms))).map_err(
            |_| ConfigError::InvalidValue {
                key: key.to_string(),
                value: raw,
            },
        ),
        None => Ok(None),
    }
}

pub fn validate_config(config: &SignupConfig) -> Result<(), ConfigError> {
    if config.login_url.trim().is_empty() {
        return Err(ConfigError::Invalid("Login URL can't be empty".to_string()));
    }

    if config.clinic_name.trim().is_empty() {
        return Err(ConfigError::Invalid("Clinic name can't be empty".to_string()));
    }

    if config.error_dismiss_after.is_zero() {
        return Err(ConfigError::Invalid("Error dismiss interval must be positive".to_string()));
    }

    Ok(())
}
