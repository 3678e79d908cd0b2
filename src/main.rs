use augur::api;
use augur::config::Config;
use augur::services::ForecastService;
use augur::AppState;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "augur=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();
    info!("Starting Augur server on {}:{}", config.host, config.port);

    let forecast = ForecastService::from_config(&config)?;
    if forecast.has_live_provider() {
        info!("Alpha Vantage API key found, using live daily closes");
    } else {
        info!("No Alpha Vantage API key, forecasts use synthetic history");
    }

    let addr = config.bind_addr();
    let app = api::app(AppState::new(config, forecast));

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Augur server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
