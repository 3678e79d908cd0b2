use super::predictor::Prediction;
use crate::types::ForecastPoint;
use chrono::{Duration, NaiveDate};
use rand::Rng;

/// Number of forecast days.
pub const FORECAST_DAYS: u32 = 7;

/// Confidence lost per forecast day.
pub const CONFIDENCE_DECAY: f64 = 0.02;

/// Per-step noise bound as a fraction of the current price.
pub const NOISE_FRACTION: f64 = 0.01;

/// Project a daily path from `current_price` to the predicted price.
///
/// Step `i` (1..=7) is dated `today + i`, priced by linear interpolation plus
/// uniform noise within ±1% of the current price, with confidence
/// `confidence - 0.02 * i`. Confidence is not clamped.
pub fn project<R: Rng + ?Sized>(
    current_price: f64,
    prediction: &Prediction,
    today: NaiveDate,
    rng: &mut R,
) -> Vec<ForecastPoint> {
    let delta = prediction.predicted_price - current_price;
    let noise = (current_price * NOISE_FRACTION).abs();

    (1..=FORECAST_DAYS)
        .map(|i| {
            let progress = i as f64 / FORECAST_DAYS as f64;
            let price = current_price + delta * progress + rng.gen_range(-noise..=noise);
            ForecastPoint {
                date: today + Duration::days(i as i64),
                price,
                confidence: prediction.confidence - i as f64 * CONFIDENCE_DECAY,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 12, 28).unwrap()
    }

    fn prediction(predicted_price: f64, confidence: f64) -> Prediction {
        Prediction {
            predicted_price,
            confidence,
        }
    }

    #[test]
    fn test_seven_consecutive_future_days() {
        let mut rng = StdRng::seed_from_u64(1);
        let points = project(100.0, &prediction(107.0, 0.8), today(), &mut rng);

        assert_eq!(points.len(), 7);
        assert_eq!(points[0].date, NaiveDate::from_ymd_opt(2024, 12, 29).unwrap());
        // Crosses the year boundary
        assert_eq!(points[6].date, NaiveDate::from_ymd_opt(2025, 1, 4).unwrap());
        assert!(points.windows(2).all(|w| (w[1].date - w[0].date).num_days() == 1));
    }

    #[test]
    fn test_prices_stay_within_noise_band() {
        let mut rng = StdRng::seed_from_u64(2);
        let points = project(200.0, &prediction(214.0, 0.8), today(), &mut rng);

        for (i, point) in points.iter().enumerate() {
            let expected = 200.0 + 14.0 * (i + 1) as f64 / 7.0;
            assert!((point.price - expected).abs() <= 2.0 + 1e-9, "step {}", i + 1);
        }
    }

    #[test]
    fn test_confidence_decays_linearly() {
        let mut rng = StdRng::seed_from_u64(3);
        let points = project(50.0, &prediction(49.0, 0.9), today(), &mut rng);

        for (i, point) in points.iter().enumerate() {
            let expected = 0.9 - (i + 1) as f64 * 0.02;
            assert!((point.confidence - expected).abs() < 1e-12);
        }
        assert!((points[6].confidence - 0.76).abs() < 1e-12);
    }

    #[test]
    fn test_confidence_is_not_clamped() {
        let mut rng = StdRng::seed_from_u64(4);
        let points = project(50.0, &prediction(50.0, 0.05), today(), &mut rng);
        assert!(points[6].confidence < 0.0);
    }

    #[test]
    fn test_zero_price_produces_flat_path() {
        let mut rng = StdRng::seed_from_u64(5);
        let points = project(0.0, &prediction(0.0, 0.8), today(), &mut rng);
        assert!(points.iter().all(|p| p.price == 0.0));
    }
}
