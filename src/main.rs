use anyhow::Result;
use etymology_fx::{config, logging, server};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (before logging setup)
    let config = match config::load().await {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    let log_level = logging::resolve_log_level(&config.server.logs.level);
    if let Err(e) = logging::init(&config.server.logs.level) {
        eprintln!("{}", e);
        std::process::exit(1);
    }

    info!("Starting etymology proxy with log level: {}", log_level);
    info!("Configuration loaded successfully");

    server::run(config).await?;

    Ok(())
}
