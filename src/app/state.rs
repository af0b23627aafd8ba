use std::sync::Arc;

use crate::config::Settings;
use crate::error::ValidatorError;
use crate::gate::{GatePolicy, GateRegistry};

/// Room for the envelope fields around `content`.
const ENVELOPE_ALLOWANCE_BYTES: usize = 64 * 1024;

/// Shared, read-only application state.
#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<GateRegistry>,
    pub default_profile: Arc<str>,
    /// Request body cap derived from the policy's payload bound
    pub body_limit: usize,
}

impl AppState {
    /// Create `AppState` from configuration settings.
    ///
    /// Loads the gate policy and fails if the default profile has no gate.
    pub fn from_settings(settings: &Settings) -> Result<Self, ValidatorError> {
        let policy = GatePolicy::load(settings.policy_file.as_deref())?;
        let registry = GateRegistry::with_defaults(&policy);
        Self::new(registry, &settings.default_profile, &policy)
    }

    pub fn new(
        registry: GateRegistry,
        default_profile: &str,
        policy: &GatePolicy,
    ) -> Result<Self, ValidatorError> {
        if !registry.contains(default_profile) {
            return Err(ValidatorError::UnknownProfile(default_profile.to_string()));
        }
        Ok(Self {
            registry: Arc::new(registry),
            default_profile: Arc::from(default_profile),
            body_limit: policy
                .max_encoded_len()
                .saturating_add(ENVELOPE_ALLOWANCE_BYTES),
        })
    }
}
