//! Augur - short-term stock price forecast server

pub mod api;
pub mod config;
pub mod error;
pub mod services;
pub mod sources;
pub mod types;

use config::Config;
use services::ForecastService;
use std::sync::Arc;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub forecast: Arc<ForecastService>,
}

impl AppState {
    pub fn new(config: Config, forecast: ForecastService) -> Self {
        Self {
            config: Arc::new(config),
            forecast: Arc::new(forecast),
        }
    }
}

// Re-export commonly used types
pub use types::*;
