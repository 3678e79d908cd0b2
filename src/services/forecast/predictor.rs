use rand::Rng;

/// Multiplier applied to the recent trend when extrapolating.
pub const TREND_MULTIPLIER: f64 = 1.2;

/// Bounds of the confidence draw.
pub const MIN_CONFIDENCE: f64 = 0.75;
pub const MAX_CONFIDENCE: f64 = 0.92;

/// Predicted price and its confidence score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Prediction {
    pub predicted_price: f64,
    /// Placeholder signal drawn uniformly from
    /// [`MIN_CONFIDENCE`, `MAX_CONFIDENCE`]. It is not derived from the trend
    /// or any statistical measure and carries no predictive meaning.
    pub confidence: f64,
}

/// Extrapolate the trend: `current * (1 + trend * 1.2)`.
pub fn predict<R: Rng + ?Sized>(current_price: f64, trend_ratio: f64, rng: &mut R) -> Prediction {
    Prediction {
        predicted_price: current_price * (1.0 + trend_ratio * TREND_MULTIPLIER),
        confidence: rng.gen_range(MIN_CONFIDENCE..=MAX_CONFIDENCE),
    }
}
