use crate::core::{InformationAggregator, InformationResponse};
use crate::utils::error::{CatalogError, Result};
use axum::{extract::State, http::StatusCode, response::Json, routing::get, Router};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

pub const INFORMATION_PATH: &str = "/information";

pub fn build_router(aggregator: Arc<InformationAggregator>) -> Router {
    Router::new()
        .route(INFORMATION_PATH, get(get_information))
        .layer(TraceLayer::new_for_http())
        .with_state(aggregator)
}

/// GET /information
///
/// Every failure is turned into the default body with a 500 status here, so
/// callers always receive a well-formed document.
pub async fn get_information(
    State(aggregator): State<Arc<InformationAggregator>>,
) -> (StatusCode, Json<InformationResponse>) {
    match aggregator.get_information().await {
        Ok(result) => (StatusCode::OK, Json(result.into())),
        Err(e) => {
            tracing::error!(
                "❌ Information request failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(InformationResponse::default()),
            )
        }
    }
}

/// Serves `router` until Ctrl-C.
pub async fn serve(listener: TcpListener, router: Router) -> Result<()> {
    let addr = listener.local_addr()?;
    tracing::info!("🌐 Listening on http://{}{}", addr, INFORMATION_PATH);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(CatalogError::IoError)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
