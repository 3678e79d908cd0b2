//! Historical series acquisition.
//!
//! Live daily closes come from Alpha Vantage. When the provider is not
//! configured or fails in any way, a synthetic 30-day series is generated
//! around the ticker's baseline price instead. The two are never mixed.

use super::assembler::round2;
use super::baseline::baseline_for;
use super::ForecastError;
use crate::config::Config;
use crate::sources::{AlphaVantageClient, AlphaVantageError};
use crate::types::PricePoint;
use chrono::{Duration, NaiveDate};
use rand::Rng;
use thiserror::Error;
use tracing::{debug, warn};

/// Maximum number of daily points in a historical series.
pub const HISTORY_LEN: usize = 30;

/// Synthetic current price deviates at most this fraction from the baseline.
pub const BASELINE_SPREAD: f64 = 0.03;

/// Absolute jitter bound for synthetic points, scaled by recency.
pub const SYNTHETIC_JITTER: f64 = 5.0;

/// Why the live provider could not supply a series.
#[derive(Debug, Error)]
pub enum ProviderUnavailable {
    #[error("live provider not configured")]
    NotConfigured,

    #[error(transparent)]
    Failed(#[from] AlphaVantageError),
}

/// Historical series tagged with the strategy that produced it.
#[derive(Debug, Clone, PartialEq)]
pub enum HistorySource {
    /// Daily closes from the live provider, oldest first.
    Live(Vec<PricePoint>),
    /// Generated series around a perturbed baseline.
    Synthetic {
        series: Vec<PricePoint>,
        baseline: f64,
        current_price: f64,
    },
}

impl HistorySource {
    /// Pick the live series if one was fetched, otherwise synthesize.
    pub fn resolve<R: Rng + ?Sized>(
        ticker: &str,
        live: Result<Vec<PricePoint>, ProviderUnavailable>,
        today: NaiveDate,
        rng: &mut R,
    ) -> Self {
        let (reason, configured) = match live {
            Ok(series) if !series.is_empty() => return HistorySource::Live(series),
            Ok(_) => ("live provider returned no points".to_string(), true),
            Err(ProviderUnavailable::NotConfigured) => {
                (ProviderUnavailable::NotConfigured.to_string(), false)
            }
            Err(e) => (e.to_string(), true),
        };

        let history = Self::synthesize(ticker, today, rng);
        if let HistorySource::Synthetic { baseline, current_price, .. } = &history {
            if configured {
                warn!(
                    "Live history unavailable for {}: {}; synthetic history around baseline {:.2} (current {:.2})",
                    ticker, reason, baseline, current_price
                );
            } else {
                debug!(
                    "{}; synthetic history for {} around baseline {:.2} (current {:.2})",
                    reason, ticker, baseline, current_price
                );
            }
        }
        history
    }

    /// Generate 30 points for the 30 days preceding `today`.
    ///
    /// Day `i` deviates from the current price by at most `5 * i / 30`, so the
    /// oldest point sits on the current price and jitter grows toward today.
    pub fn synthesize<R: Rng + ?Sized>(ticker: &str, today: NaiveDate, rng: &mut R) -> Self {
        let baseline = baseline_for(ticker);
        let spread = baseline * BASELINE_SPREAD;
        let current_price = baseline + rng.gen_range(-spread..=spread);

        let start = today - Duration::days(HISTORY_LEN as i64);
        let series = (0..HISTORY_LEN)
            .map(|i| {
                let weight = i as f64 / HISTORY_LEN as f64;
                let jitter = rng.gen_range(-SYNTHETIC_JITTER..=SYNTHETIC_JITTER);
                PricePoint::new(
                    start + Duration::days(i as i64),
                    round2(current_price + jitter * weight),
                )
            })
            .collect();

        HistorySource::Synthetic {
            series,
            baseline,
            current_price,
        }
    }

    /// The historical points, oldest first.
    pub fn series(&self) -> &[PricePoint] {
        match self {
            HistorySource::Live(series) => series,
            HistorySource::Synthetic { series, .. } => series,
        }
    }

    pub fn into_series(self) -> Vec<PricePoint> {
        match self {
            HistorySource::Live(series) => series,
            HistorySource::Synthetic { series, .. } => series,
        }
    }

    /// Current price: last live close, or the drawn synthetic price.
    pub fn current_price(&self) -> Result<f64, ForecastError> {
        match self {
            HistorySource::Live(series) => series
                .last()
                .map(|p| p.price)
                .ok_or(ForecastError::EmptySeries),
            HistorySource::Synthetic { current_price, .. } => Ok(*current_price),
        }
    }

    /// Strategy name for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            HistorySource::Live(_) => "live",
            HistorySource::Synthetic { .. } => "synthetic",
        }
    }
}

/// Fetches live daily closes when a provider credential is configured.
pub struct HistoricalSeriesProvider {
    client: Option<AlphaVantageClient>,
}

impl HistoricalSeriesProvider {
    pub fn new(client: Option<AlphaVantageClient>) -> Self {
        Self { client }
    }

    /// Build from configuration; a missing API key disables the live provider.
    pub fn from_config(config: &Config) -> Result<Self, AlphaVantageError> {
        let client = match &config.alpha_vantage_api_key {
            Some(api_key) => Some(AlphaVantageClient::new(
                api_key.clone(),
                &config.alpha_vantage_url,
                config.provider_timeout(),
            )?),
            None => None,
        };
        Ok(Self::new(client))
    }

    pub fn is_configured(&self) -> bool {
        self.client.is_some()
    }

    /// Single attempt at the live series. No retries.
    pub async fn fetch_live(&self, ticker: &str) -> Result<Vec<PricePoint>, ProviderUnavailable> {
        let client = self.client.as_ref().ok_or(ProviderUnavailable::NotConfigured)?;
        Ok(client.get_daily_closes(ticker, HISTORY_LEN).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
    }

    fn live_series() -> Vec<PricePoint> {
        (1..=5)
            .map(|d| PricePoint::new(NaiveDate::from_ymd_opt(2024, 3, d).unwrap(), 100.0 + d as f64))
            .collect()
    }

    #[test]
    fn test_synthetic_series_shape() {
        let mut rng = StdRng::seed_from_u64(7);
        let history = HistorySource::synthesize("AAPL", today(), &mut rng);
        let series = history.series();

        assert_eq!(series.len(), HISTORY_LEN);
        assert_eq!(series[0].date, NaiveDate::from_ymd_opt(2024, 2, 14).unwrap());
        assert_eq!(series[29].date, NaiveDate::from_ymd_opt(2024, 3, 14).unwrap());
        assert!(series.windows(2).all(|w| (w[1].date - w[0].date).num_days() == 1));
        assert!(series.iter().all(|p| p.price > 0.0));
    }

    #[test]
    fn test_synthetic_current_price_near_baseline() {
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let history = HistorySource::synthesize("AAPL", today(), &mut rng);
            let price = history.current_price().unwrap();
            assert!((221.16..=234.84).contains(&price), "seed {seed}: {price}");
        }
    }

    #[test]
    fn test_synthetic_jitter_grows_with_recency() {
        let mut rng = StdRng::seed_from_u64(11);
        let history = HistorySource::synthesize("MSFT", today(), &mut rng);
        let current = history.current_price().unwrap();

        for (i, point) in history.series().iter().enumerate() {
            let bound = SYNTHETIC_JITTER * i as f64 / HISTORY_LEN as f64 + 0.005;
            assert!((point.price - current).abs() <= bound, "day {i}");
        }
    }

    #[test]
    fn test_synthetic_unknown_ticker_uses_default_baseline() {
        let mut rng = StdRng::seed_from_u64(3);
        match HistorySource::synthesize("QQQX", today(), &mut rng) {
            HistorySource::Synthetic { baseline, current_price, .. } => {
                assert_eq!(baseline, 100.0);
                assert!((97.0..=103.0).contains(&current_price));
            }
            other => panic!("expected synthetic history, got {other:?}"),
        }
    }

    #[test]
    fn test_synthetic_is_reproducible_with_seed() {
        let a = HistorySource::synthesize("TSLA", today(), &mut StdRng::seed_from_u64(42));
        let b = HistorySource::synthesize("TSLA", today(), &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn test_resolve_prefers_live() {
        let mut rng = StdRng::seed_from_u64(1);
        let history = HistorySource::resolve("AAPL", Ok(live_series()), today(), &mut rng);

        assert!(matches!(history, HistorySource::Live(_)));
        assert_eq!(history.kind(), "live");
        assert_eq!(history.series().len(), 5);
        assert_eq!(history.current_price().unwrap(), 105.0);
    }

    #[test]
    fn test_resolve_falls_back_when_not_configured() {
        let mut rng = StdRng::seed_from_u64(1);
        let history = HistorySource::resolve(
            "AAPL",
            Err(ProviderUnavailable::NotConfigured),
            today(),
            &mut rng,
        );
        assert_eq!(history.kind(), "synthetic");
        assert_eq!(history.series().len(), HISTORY_LEN);
    }

    #[test]
    fn test_resolve_falls_back_on_provider_error() {
        let mut rng = StdRng::seed_from_u64(1);
        let err = ProviderUnavailable::Failed(AlphaVantageError::Status(500));
        let history = HistorySource::resolve("AAPL", Err(err), today(), &mut rng);
        assert_eq!(history.kind(), "synthetic");
    }

    #[test]
    fn test_resolve_falls_back_on_empty_live_series() {
        let mut rng = StdRng::seed_from_u64(1);
        let history = HistorySource::resolve("AAPL", Ok(Vec::new()), today(), &mut rng);
        assert_eq!(history.kind(), "synthetic");
    }

    #[test]
    fn test_empty_live_series_has_no_current_price() {
        let history = HistorySource::Live(Vec::new());
        assert_eq!(history.current_price(), Err(ForecastError::EmptySeries));
    }

    #[tokio::test]
    async fn test_unconfigured_provider_reports_not_configured() {
        let provider = HistoricalSeriesProvider::from_config(&Config::default()).unwrap();
        assert!(!provider.is_configured());
        assert!(matches!(
            provider.fetch_live("AAPL").await,
            Err(ProviderUnavailable::NotConfigured)
        ));
    }
}
