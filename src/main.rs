use crate::app_config::{AppConfig, Model};
use crate::eagle::{EagleClient, EagleCollector};
use std::sync::Arc;
use tracing::info;

mod app_config;
mod eagle;
mod exposition;
mod metrics;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();

    info!("🪵 Starting {} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    let config = AppConfig::load();
    info!("✅  Loaded configuration");

    let collector = match config.eagle().model() {
        Model::Eagle200 => EagleCollector::new(EagleClient::new(&config)?),
    };
    info!("✅  Initialized Eagle-200 client");

    let app = exposition::router(Arc::new(collector));
    let address = format!("{}:{}", config.core().bind_address(), config.core().port());
    let listener = tokio::net::TcpListener::bind(&address).await?;
    info!("🔥 {} is serving metrics on {}", env!("CARGO_PKG_NAME"), address);

    axum::serve(listener, app).await?;

    Ok(())
}
