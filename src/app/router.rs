use crate::app::state::AppState;
use crate::handler::health::health_handler;
use crate::handler::validate::{validate_default_handler, validate_profile_handler};
use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};

/// Build the HTTP router (health + validation).
pub fn main_router(state: AppState) -> Router {
    let v1_health_router = Router::new().route("/v1/health", get(health_handler));

    let body_limit = state.body_limit;
    let v1_validate_router = Router::new()
        .route("/v1/validate", post(validate_default_handler))
        .route(
            "/v1/profiles/{profile}/validate",
            post(validate_profile_handler),
        )
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state);

    Router::new()
        .merge(v1_health_router)
        .merge(v1_validate_router)
}
