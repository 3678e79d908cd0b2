use super::predictor::Prediction;
use super::ForecastError;
use crate::types::{ForecastPoint, PredictionResponse, PricePoint};
use chrono::{DateTime, Utc};

/// Round to 2 decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Round and package pipeline results into a response.
pub fn assemble(
    ticker: &str,
    current_price: f64,
    prediction: &Prediction,
    historical: Vec<PricePoint>,
    forecast: Vec<ForecastPoint>,
    generated_at: DateTime<Utc>,
) -> Result<PredictionResponse, ForecastError> {
    if current_price == 0.0 {
        return Err(ForecastError::ZeroCurrentPrice);
    }

    let change = (prediction.predicted_price - current_price) / current_price * 100.0;

    Ok(PredictionResponse {
        ticker: ticker.to_uppercase(),
        current_price: round2(current_price),
        predicted_price: round2(prediction.predicted_price),
        prediction_change: round2(change),
        confidence: round2(prediction.confidence * 100.0),
        historical_data: historical
            .into_iter()
            .map(|p| PricePoint::new(p.date, round2(p.price)))
            .collect(),
        forecast_data: forecast
            .into_iter()
            .map(|p| ForecastPoint {
                date: p.date,
                price: round2(p.price),
                confidence: round2(p.confidence),
            })
            .collect(),
        last_updated: generated_at,
    })
}
