use std::time::Duration;

#[derive(Debug, thiserror::Error)]
pub enum HealthcheckError {
    #[error("Healthcheck failed: could not create HTTP client: {0}")]
    Client(#[source] reqwest::Error),
    #[error("Healthcheck failed: request failed: {0}")]
    Request(#[source] reqwest::Error),
    #[error("Healthcheck failed: health endpoint returned status {0}")]
    Status(reqwest::StatusCode),
}

/// Probe `GET /v1/health` on the loopback interface.
///
/// Used as the container healthcheck, where no shell or curl is available.
pub async fn healthcheck_with_port(port: u16) -> Result<(), HealthcheckError> {
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(2))
        .build()
        .map_err(HealthcheckError::Client)?;

    let resp = client
        .get(format!("http://127.0.0.1:{port}/v1/health"))
        .send()
        .await
        .map_err(HealthcheckError::Request)?;

    match resp.status() {
        status if status.is_success() => Ok(()),
        status => Err(HealthcheckError::Status(status)),
    }
}
