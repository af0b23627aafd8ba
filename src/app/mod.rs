mod router;
pub mod server;
pub mod state;
pub mod tracing;

use std::fs;
use std::path::Path;

use crate::config;
use crate::domain::{ConfigurationPayload, ValidationResult};
use crate::error::ValidatorError;
use crate::gate::{GatePolicy, GateRegistry};

pub use router::main_router;
pub use state::AppState;

/// Service entry point. Initializes tracing, configuration, and starts the server.
pub async fn run() -> Result<(), ValidatorError> {
    tracing::init_tracing();

    let settings = config::get_configuration()?;
    ::tracing::info!(
        http_port = settings.http_port,
        default_profile = %settings.default_profile,
        "Loaded settings"
    );

    let app_state = AppState::from_settings(&settings)?;
    let app = main_router(app_state);

    server::serve(app, settings.http_port).await
}

/// Validate a document on disk the same way the pipeline would submit it.
pub fn check_document(
    path: &Path,
    profile: &str,
    policy_file: Option<&Path>,
) -> Result<ValidationResult, ValidatorError> {
    let policy = GatePolicy::load(policy_file)?;
    let registry = GateRegistry::with_defaults(&policy);
    let gate = registry
        .get(profile)
        .ok_or_else(|| ValidatorError::UnknownProfile(profile.to_string()))?;

    let document = fs::read(path).map_err(|source| ValidatorError::ReadDocument {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(gate.validate(&ConfigurationPayload::from_document(document)))
}
