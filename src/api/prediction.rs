//! Price prediction endpoint.

use crate::error::Result;
use crate::types::PredictionResponse;
use crate::AppState;
use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use tracing::info;

/// Query parameters for the prediction endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct PredictionQuery {
    pub ticker: Option<String>,
}

/// Create the prediction router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/prediction", get(get_prediction))
        .route("/api/prediction/", get(get_prediction))
}

/// Get a seven-day forecast for a ticker.
///
/// Any symbol is accepted; unknown ones get a synthetic forecast.
async fn get_prediction(
    State(state): State<AppState>,
    Query(query): Query<PredictionQuery>,
) -> Result<Json<PredictionResponse>> {
    let ticker = normalize_ticker(query.ticker.as_deref(), &state.config.default_ticker);
    let prediction = state.forecast.predict(&ticker).await?;

    info!(
        "Prediction for {}: {:.2} -> {:.2} ({:+.2}%)",
        prediction.ticker,
        prediction.current_price,
        prediction.predicted_price,
        prediction.prediction_change
    );

    Ok(Json(prediction))
}

/// Uppercase the requested ticker, falling back to `default` when blank.
pub fn normalize_ticker(raw: Option<&str>, default: &str) -> String {
    raw.map(str::trim)
        .filter(|t| !t.is_empty())
        .unwrap_or(default)
        .to_uppercase()
}
