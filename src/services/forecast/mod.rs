//! Forecast synthesis pipeline.
//!
//! history -> trend -> prediction -> projection -> response. Each request gets
//! its own random source; nothing is shared between requests.

pub mod assembler;
pub mod baseline;
pub mod history;
pub mod predictor;
pub mod projector;
pub mod trend;

pub use history::{HistoricalSeriesProvider, HistorySource, ProviderUnavailable};
pub use predictor::Prediction;

use crate::config::Config;
use crate::sources::AlphaVantageError;
use crate::types::{PredictionResponse, PricePoint};
use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use thiserror::Error;
use tracing::debug;

/// Domain invariant violations. Unreachable with well-formed data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ForecastError {
    #[error("Historical series is empty")]
    EmptySeries,

    #[error("Trend window starts at a zero price")]
    ZeroTrendBaseline,

    #[error("Cannot compute change from a zero current price")]
    ZeroCurrentPrice,
}

/// Builds price forecasts for tickers.
pub struct ForecastService {
    provider: HistoricalSeriesProvider,
}

impl ForecastService {
    pub fn new(provider: HistoricalSeriesProvider) -> Self {
        Self { provider }
    }

    pub fn from_config(config: &Config) -> Result<Self, AlphaVantageError> {
        Ok(Self::new(HistoricalSeriesProvider::from_config(config)?))
    }

    /// Whether live market data is configured.
    pub fn has_live_provider(&self) -> bool {
        self.provider.is_configured()
    }

    /// Forecast for `ticker` using a freshly seeded random source.
    pub async fn predict(&self, ticker: &str) -> Result<PredictionResponse, ForecastError> {
        self.predict_with_rng(ticker, &mut StdRng::from_entropy()).await
    }

    /// Forecast for `ticker` drawing all randomness from `rng`.
    pub async fn predict_with_rng<R: Rng + ?Sized>(
        &self,
        ticker: &str,
        rng: &mut R,
    ) -> Result<PredictionResponse, ForecastError> {
        let ticker = ticker.trim().to_uppercase();
        let live = self.provider.fetch_live(&ticker).await;
        build_prediction(&ticker, live, Utc::now(), rng)
    }
}

/// Run the synchronous part of the pipeline on an already-fetched live result.
pub fn build_prediction<R: Rng + ?Sized>(
    ticker: &str,
    live: Result<Vec<PricePoint>, ProviderUnavailable>,
    now: DateTime<Utc>,
    rng: &mut R,
) -> Result<PredictionResponse, ForecastError> {
    let today = now.date_naive();

    let history = HistorySource::resolve(ticker, live, today, rng);
    let current_price = history.current_price()?;
    debug!(
        "{}: {} history with {} points, current price {:.2}",
        ticker,
        history.kind(),
        history.series().len(),
        current_price
    );

    let trend_ratio = trend::estimate(history.series())?;
    let prediction = predictor::predict(current_price, trend_ratio, rng);
    debug!(
        "{}: trend {:.4}, predicted {:.2}, confidence {:.3}",
        ticker, trend_ratio, prediction.predicted_price, prediction.confidence
    );

    let forecast = projector::project(current_price, &prediction, today, rng);

    assembler::assemble(
        ticker,
        current_price,
        &prediction,
        history.into_series(),
        forecast,
        now,
    )
}
