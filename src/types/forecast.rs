use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A single daily closing price.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    /// Calendar date, serialized as `YYYY-MM-DD`.
    pub date: NaiveDate,
    pub price: f64,
}

impl PricePoint {
    pub fn new(date: NaiveDate, price: f64) -> Self {
        Self { date, price }
    }
}

/// A projected price for a future day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ForecastPoint {
    pub date: NaiveDate,
    pub price: f64,
    /// Decayed confidence for this horizon (0-1 scale, not clamped).
    pub confidence: f64,
}

/// Forecast payload returned by the prediction endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResponse {
    /// Uppercased ticker symbol.
    pub ticker: String,
    pub current_price: f64,
    pub predicted_price: f64,
    /// Percent change from current to predicted price.
    pub prediction_change: f64,
    /// Confidence as a percentage.
    pub confidence: f64,
    /// Oldest-first daily closes.
    pub historical_data: Vec<PricePoint>,
    /// Seven daily projections, starting the day after generation.
    pub forecast_data: Vec<ForecastPoint>,
    /// Generation timestamp (RFC 3339).
    pub last_updated: DateTime<Utc>,
}

/// Health check payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub service: String,
}
