use crate::error::ValidatorError;
use axum::Router;
use tokio::signal;
use tracing::info;

/// Bind the listener and serve `app` until SIGINT or SIGTERM.
pub async fn serve(app: Router, http_port: u16) -> Result<(), ValidatorError> {
    let bind_addr = format!("0.0.0.0:{http_port}");
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .map_err(|e| ValidatorError::Bind {
            address: bind_addr.clone(),
            source: e,
        })?;
    info!("Validator listening on {}", listener.local_addr()?);
    info!("  - GET  /v1/health                       (health check)");
    info!("  - POST /v1/validate                     (default profile)");
    info!("  - POST /v1/profiles/{{profile}}/validate  (named profile)");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

/// Wait for SIGTERM or SIGINT (Ctrl+C) for graceful shutdown.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::warn!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::warn!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("Received SIGINT, initiating graceful shutdown"),
        () = terminate => info!("Received SIGTERM, initiating graceful shutdown"),
    }
}
