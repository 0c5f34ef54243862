use crate::eagle::EagleCollector;
use crate::metrics::encode_samples;
use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::Router;
use std::sync::Arc;
use tracing::warn;

/// Builds the scrape endpoint. Every request to `/metrics` triggers a full
/// re-poll of the gateway; a failed poll publishes nothing and returns a 500.
pub fn router(collector: Arc<EagleCollector>) -> Router {
    Router::new().route("/metrics", get(metrics)).with_state(collector)
}

async fn metrics(State(collector): State<Arc<EagleCollector>>) -> impl IntoResponse {
    let samples = match collector.collect().await {
        Ok(samples) => samples,
        Err(e) => {
            warn!("⚠️ Scrape failed: {e}");
            return (StatusCode::INTERNAL_SERVER_ERROR, format!("scrape failed: {e}\n")).into_response();
        }
    };

    match encode_samples(&samples) {
        Ok(body) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
            body,
        )
            .into_response(),
        Err(e) => {
            warn!("⚠️ Could not encode samples: {e}");
            (StatusCode::INTERNAL_SERVER_ERROR, format!("encoding failed: {e}\n")).into_response()
        }
    }
}
