pub mod alphavantage;

pub use alphavantage::{AlphaVantageClient, AlphaVantageError};
