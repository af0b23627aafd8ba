use appconfig_validator::app::{AppState, main_router};
use appconfig_validator::gate::{GatePolicy, GateRegistry, LOGGING_PROFILE};
use axum::Router;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde_json::{Value, json};

pub fn test_app() -> Router {
    test_app_with_policy(&GatePolicy::default())
}

pub fn test_app_with_policy(policy: &GatePolicy) -> Router {
    let registry = GateRegistry::with_defaults(policy);
    let state = AppState::new(registry, LOGGING_PROFILE, policy).unwrap();
    main_router(state)
}

/// Request envelope carrying `document` the way the pipeline encodes it.
pub fn envelope(document: &str) -> Value {
    json!({ "content": STANDARD.encode(document) })
}
