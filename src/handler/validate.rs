use crate::app::state::AppState;
use crate::domain::{ConfigurationPayload, Rejection};
use crate::gate;
use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use tracing::{info, warn};

/// Error body in the shape the pipeline reports for failed validators.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBody {
    pub error_type: String,
    pub error_message: String,
}

impl ErrorBody {
    fn new(error_type: impl Into<String>, error_message: impl Into<String>) -> Self {
        Self {
            error_type: error_type.into(),
            error_message: error_message.into(),
        }
    }
}

impl From<&Rejection> for ErrorBody {
    fn from(rejection: &Rejection) -> Self {
        Self::new(rejection.kind.as_str(), rejection.reason.as_str())
    }
}

/// Handler for POST /v1/validate
pub async fn validate_default_handler(
    State(state): State<AppState>,
    payload: Result<Json<ConfigurationPayload>, JsonRejection>,
) -> Response {
    let profile = state.default_profile.clone();
    run_gate(&state, &profile, payload)
}

/// Handler for POST /v1/profiles/{profile}/validate
pub async fn validate_profile_handler(
    State(state): State<AppState>,
    Path(profile): Path<String>,
    payload: Result<Json<ConfigurationPayload>, JsonRejection>,
) -> Response {
    run_gate(&state, &profile, payload)
}

fn run_gate(
    state: &AppState,
    profile: &str,
    payload: Result<Json<ConfigurationPayload>, JsonRejection>,
) -> Response {
    let Some(gate) = state.registry.get(profile) else {
        warn!(%profile, "Validation requested for unknown profile");
        return (
            StatusCode::NOT_FOUND,
            Json(ErrorBody::new(
                "UnknownProfile",
                format!("Unknown configuration profile: {profile}"),
            )),
        )
            .into_response();
    };

    // Keep 422 for gate rejections; envelope problems are the caller's request.
    let Json(payload) = match payload {
        Ok(payload) => payload,
        Err(rejection) => {
            let status = match rejection.status() {
                StatusCode::PAYLOAD_TOO_LARGE => StatusCode::PAYLOAD_TOO_LARGE,
                _ => StatusCode::BAD_REQUEST,
            };
            warn!(%profile, %status, "Malformed validation request: {}", rejection.body_text());
            return (
                status,
                Json(ErrorBody::new("InvalidRequest", rejection.body_text())),
            )
                .into_response();
        }
    };

    info!(%profile, "Received validation request");

    match gate::invoke(gate, &payload) {
        Ok(token) => (StatusCode::OK, token).into_response(),
        Err(rejection) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ErrorBody::from(&rejection)),
        )
            .into_response(),
    }
}
