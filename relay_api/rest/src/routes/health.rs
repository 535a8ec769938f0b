use std::sync::Arc;

use axum::{extract::State, routing, Json, Router};
use chrono::{DateTime, Utc};
use relay_core_health_contracts::{HealthFeatureService, HealthStatus};
use serde::Serialize;

pub fn router(service: Arc<impl HealthFeatureService>) -> Router<()> {
    Router::new()
        .route("/health", routing::get(health))
        .with_state(service)
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    timestamp: DateTime<Utc>,
}

async fn health(service: State<Arc<impl HealthFeatureService>>) -> Json<HealthResponse> {
    let HealthStatus { timestamp } = service.get_status().await;

    Json(HealthResponse {
        status: "healthy",
        timestamp,
    })
}
