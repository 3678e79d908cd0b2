pub mod forecast;

pub use forecast::{ForecastError, ForecastService, HistoricalSeriesProvider, HistorySource};
