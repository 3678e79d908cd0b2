use crate::types::HealthResponse;
use crate::AppState;
use axum::{extract::State, routing::get, Json, Router};

async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: chrono::Utc::now(),
        service: state.config.service_name.clone(),
    })
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/health", get(health))
        .route("/api/health/", get(health))
}
