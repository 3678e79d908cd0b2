use std::env;
use std::time::Duration;

/// Default Alpha Vantage endpoint.
pub const DEFAULT_ALPHA_VANTAGE_URL: &str = "https://www.alphavantage.co";

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server host address.
    pub host: String,
    /// Server port.
    pub port: u16,
    /// Alpha Vantage API key. `None` means the live provider is not configured.
    pub alpha_vantage_api_key: Option<String>,
    /// Alpha Vantage base URL (overridable for testing).
    pub alpha_vantage_url: String,
    /// Timeout for the live daily-series fetch, in seconds.
    pub provider_timeout_secs: u64,
    /// Ticker used when a request does not name one.
    pub default_ticker: String,
    /// Service name reported by the health endpoint.
    pub service_name: String,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8000),
            // An empty key is the same as no key
            alpha_vantage_api_key: env::var("ALPHA_VANTAGE_API_KEY")
                .ok()
                .filter(|k| !k.trim().is_empty()),
            alpha_vantage_url: env::var("ALPHA_VANTAGE_URL")
                .unwrap_or_else(|_| DEFAULT_ALPHA_VANTAGE_URL.to_string()),
            provider_timeout_secs: env::var("PROVIDER_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),
            default_ticker: env::var("DEFAULT_TICKER")
                .ok()
                .map(|t| t.trim().to_uppercase())
                .filter(|t| !t.is_empty())
                .unwrap_or_else(|| "AAPL".to_string()),
            service_name: env::var("SERVICE_NAME").unwrap_or_else(|_| "Augur API".to_string()),
        }
    }

    /// Timeout applied to the live provider request.
    pub fn provider_timeout(&self) -> Duration {
        Duration::from_secs(self.provider_timeout_secs)
    }

    /// Address the server binds to.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            alpha_vantage_api_key: None,
            alpha_vantage_url: DEFAULT_ALPHA_VANTAGE_URL.to_string(),
            provider_timeout_secs: 10,
            default_ticker: "AAPL".to_string(),
            service_name: "Augur API".to_string(),
        }
    }
}
