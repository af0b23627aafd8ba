use std::env;
use std::path::PathBuf;

use crate::error::ValidatorError;
use crate::gate::LOGGING_PROFILE;

pub const DEFAULT_HTTP_PORT: u16 = 9700;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// HTTP port for the validation and health endpoints
    pub http_port: u16,
    /// Profile validated by `POST /v1/validate`
    pub default_profile: String,
    /// Optional YAML file overriding the built-in gate policy
    pub policy_file: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            http_port: DEFAULT_HTTP_PORT,
            default_profile: LOGGING_PROFILE.to_string(),
            policy_file: None,
        }
    }
}

impl Settings {
    /// Validates the settings and returns an error if invalid.
    pub fn validate(&self) -> Result<(), ValidatorError> {
        validate_port(self.http_port)?;
        validate_profile(&self.default_profile)?;
        Ok(())
    }
}

/// Validates that the port is in valid range (1-65535).
fn validate_port(port: u16) -> Result<(), ValidatorError> {
    if port == 0 {
        return Err(ValidatorError::Config("Port cannot be 0".into()));
    }
    Ok(())
}

fn validate_profile(profile: &str) -> Result<(), ValidatorError> {
    if profile.trim().is_empty() {
        return Err(ValidatorError::Config("Default profile cannot be empty".into()));
    }
    Ok(())
}

/// Non-empty value of `name`, treating blank values as unset.
fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.trim().is_empty())
}

pub fn get_configuration() -> Result<Settings, ValidatorError> {
    let http_port = match non_empty_var("HTTP_PORT") {
        Some(raw) => raw
            .trim()
            .parse::<u16>()
            .map_err(|e| ValidatorError::Config(format!("Invalid HTTP_PORT '{raw}': {e}")))?,
        None => DEFAULT_HTTP_PORT,
    };
    let default_profile =
        non_empty_var("DEFAULT_PROFILE").unwrap_or_else(|| LOGGING_PROFILE.to_string());
    let policy_file = non_empty_var("GATE_POLICY_FILE").map(PathBuf::from);

    let settings = Settings {
        http_port,
        default_profile,
        policy_file,
    };

    // Validate settings before returning
    settings.validate()?;

    Ok(settings)
}
