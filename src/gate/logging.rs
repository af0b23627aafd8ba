use serde_yaml::Value;

use super::ProfileValidator;
use super::error::GateError;
use super::policy::GatePolicy;

/// Top-level key holding the logging section. A single key, not a path.
pub const SECTION_KEY: &str = "application.logging";
pub const LEVEL_KEY: &str = "level";

/// Schema checks for the `LoggingConfiguration` profile.
#[derive(Debug, Clone)]
pub struct LoggingValidator {
    policy: GatePolicy,
    allowed_phrase: String,
}

impl LoggingValidator {
    pub fn new(policy: &GatePolicy) -> Self {
        Self {
            allowed_phrase: policy.allowed_levels_phrase(),
            policy: policy.clone(),
        }
    }
}

impl ProfileValidator for LoggingValidator {
    fn name(&self) -> &'static str {
        "logging"
    }

    fn check(&self, document: &Value) -> Result<(), GateError> {
        // `get` yields None for non-mapping values, so a scalar root or a
        // scalar section reads as a missing key.
        let section = document
            .get(SECTION_KEY)
            .ok_or_else(|| GateError::MissingSection(SECTION_KEY.to_string()))?;

        let level = section
            .get(LEVEL_KEY)
            .ok_or_else(|| GateError::MissingField(LEVEL_KEY.to_string()))?;

        match level.as_str() {
            Some(level) if self.policy.permits(level) => Ok(()),
            _ => Err(GateError::InvalidValue {
                allowed: self.allowed_phrase.clone(),
            }),
        }
    }
}
