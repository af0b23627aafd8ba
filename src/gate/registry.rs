use std::collections::BTreeMap;

use super::ValidationGate;
use super::policy::GatePolicy;

/// Profile guarded by the built-in logging gate.
pub const LOGGING_PROFILE: &str = "LoggingConfiguration";

/// Maps configuration profile names to the gate that guards them.
///
/// Built once at start-up and shared read-only.
#[derive(Default)]
pub struct GateRegistry {
    gates: BTreeMap<String, ValidationGate>,
}

impl GateRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with every built-in profile registered under `policy`.
    pub fn with_defaults(policy: &GatePolicy) -> Self {
        let mut registry = Self::new();
        registry.register(LOGGING_PROFILE, ValidationGate::logging(policy));
        registry
    }

    /// Register `gate` for `profile`, replacing any previous gate.
    pub fn register(&mut self, profile: impl Into<String>, gate: ValidationGate) -> &mut Self {
        let profile = profile.into();
        if self.gates.insert(profile.clone(), gate).is_some() {
            tracing::warn!(%profile, "replaced existing validation gate");
        }
        self
    }

    pub fn get(&self, profile: &str) -> Option<&ValidationGate> {
        self.gates.get(profile)
    }

    pub fn contains(&self, profile: &str) -> bool {
        self.gates.contains_key(profile)
    }

    pub fn profiles(&self) -> impl Iterator<Item = &str> {
        self.gates.keys().map(String::as_str)
    }
}
