//! Alpha Vantage API client for daily closing prices.
//!
//! Only `TIME_SERIES_DAILY` is used. Note: the free tier is heavily rate limited
//! (25 requests/day) and answers over-limit calls with HTTP 200 and a `Note` or
//! `Information` body instead of the time series.

use crate::types::PricePoint;
use chrono::NaiveDate;
use reqwest::Client;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

/// Alpha Vantage client errors.
#[derive(Debug, Error)]
pub enum AlphaVantageError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API error: HTTP {0}")]
    Status(u16),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("No daily time series in response: {0}")]
    MissingSeries(String),

    #[error("Invalid data point: {0}")]
    InvalidPoint(String),
}

/// Time series daily response.
#[derive(Debug, Clone, Deserialize)]
pub struct TimeSeriesDailyResponse {
    #[serde(rename = "Time Series (Daily)")]
    pub time_series: Option<BTreeMap<String, DailyBar>>,
    /// Rate limit notice.
    #[serde(rename = "Note")]
    pub note: Option<String>,
    /// Premium/limit notice on newer API versions.
    #[serde(rename = "Information")]
    pub information: Option<String>,
    /// Unknown symbol or bad request.
    #[serde(rename = "Error Message")]
    pub error_message: Option<String>,
}

impl TimeSeriesDailyResponse {
    /// Best available explanation for a response without a time series.
    fn reason(&self) -> String {
        self.error_message
            .as_ref()
            .or(self.note.as_ref())
            .or(self.information.as_ref())
            .cloned()
            .unwrap_or_else(|| "unrecognized response shape".to_string())
    }
}

/// One daily bar. Alpha Vantage sends numbers as strings.
#[derive(Debug, Clone, Deserialize)]
pub struct DailyBar {
    #[serde(rename = "4. close")]
    pub close: String,
}

/// Alpha Vantage API client.
pub struct AlphaVantageClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl AlphaVantageClient {
    /// Create a new Alpha Vantage client with a bounded request timeout.
    pub fn new(
        api_key: String,
        base_url: &str,
        timeout: Duration,
    ) -> Result<Self, AlphaVantageError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("augur/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Fetch the most recent `limit` daily closes, oldest first.
    ///
    /// A single malformed entry fails the whole series.
    pub async fn get_daily_closes(
        &self,
        symbol: &str,
        limit: usize,
    ) -> Result<Vec<PricePoint>, AlphaVantageError> {
        let url = format!("{}/query", self.base_url);

        let response = self
            .client
            .get(&url)
            .query(&[
                ("function", "TIME_SERIES_DAILY"),
                ("symbol", symbol),
                ("outputsize", "compact"),
                ("apikey", self.api_key.as_str()),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(AlphaVantageError::Status(response.status().as_u16()));
        }

        let body = response.text().await?;
        let data: TimeSeriesDailyResponse =
            serde_json::from_str(&body).map_err(|e| AlphaVantageError::Parse(e.to_string()))?;

        let points = parse_daily_closes(data, limit)?;
        debug!("Alpha Vantage returned {} daily closes for {}", points.len(), symbol);
        Ok(points)
    }
}

/// Convert a daily response into at most `limit` of its latest closes, oldest first.
///
/// Keys are ISO dates, so key order is date order. Only the selected entries
/// are validated; a bad one fails the whole series.
pub fn parse_daily_closes(
    data: TimeSeriesDailyResponse,
    limit: usize,
) -> Result<Vec<PricePoint>, AlphaVantageError> {
    let reason = data.reason();
    let time_series = data
        .time_series
        .ok_or(AlphaVantageError::MissingSeries(reason))?;

    if time_series.is_empty() {
        return Err(AlphaVantageError::MissingSeries("empty time series".to_string()));
    }

    let skip = time_series.len().saturating_sub(limit);
    time_series
        .into_iter()
        .skip(skip)
        .map(|(date_str, bar)| parse_bar(&date_str, &bar))
        .collect()
}

fn parse_bar(date_str: &str, bar: &DailyBar) -> Result<PricePoint, AlphaVantageError> {
    let date = NaiveDate::parse_from_str(date_str, "%Y-%m-%d")
        .map_err(|_| AlphaVantageError::InvalidPoint(format!("bad date {:?}", date_str)))?;
    let close: f64 = bar.close.trim().parse().map_err(|_| {
        AlphaVantageError::InvalidPoint(format!("bad close {:?} on {}", bar.close, date_str))
    })?;
    if !close.is_finite() || close <= 0.0 {
        return Err(AlphaVantageError::InvalidPoint(format!(
            "non-positive close {} on {}",
            close, date_str
        )));
    }
    Ok(PricePoint::new(date, close))
}
