use super::ForecastError;
use crate::types::PricePoint;

/// Number of most recent points used for the trend.
pub const TREND_WINDOW: usize = 7;

/// Relative price change across the last [`TREND_WINDOW`] points.
///
/// Uses every point when the series is shorter than the window.
pub fn estimate(series: &[PricePoint]) -> Result<f64, ForecastError> {
    let window = &series[series.len().saturating_sub(TREND_WINDOW)..];
    let (oldest, latest) = match (window.first(), window.last()) {
        (Some(oldest), Some(latest)) => (oldest.price, latest.price),
        _ => return Err(ForecastError::EmptySeries),
    };

    if oldest == 0.0 {
        return Err(ForecastError::ZeroTrendBaseline);
    }

    Ok((latest - oldest) / oldest)
}
