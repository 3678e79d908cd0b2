//! Reference prices used to seed synthetic history.

/// Baseline for symbols not in [`TICKER_BASELINES`].
pub const DEFAULT_BASELINE: f64 = 100.0;

/// Known symbol baselines.
pub const TICKER_BASELINES: &[(&str, f64)] = &[
    ("AAPL", 228.0),
    ("GOOGL", 140.0),
    ("MSFT", 420.0),
    ("AMZN", 185.0),
    ("TSLA", 250.0),
    ("NVDA", 140.0),
    ("META", 570.0),
    ("NFLX", 725.0),
    ("AMD", 140.0),
    ("SPY", 585.0),
];

/// Look up the baseline price for a ticker (case-insensitive).
pub fn baseline_for(ticker: &str) -> f64 {
    TICKER_BASELINES
        .iter()
        .find(|(symbol, _)| symbol.eq_ignore_ascii_case(ticker))
        .map(|(_, price)| *price)
        .unwrap_or(DEFAULT_BASELINE)
}
