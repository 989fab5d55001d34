pub mod handlers;
pub mod types;

use crate::{
    Result,
    config::Config,
    etymology::EtymologyService,
    llm::{LlmClient, OpenAiClient},
};
use axum::{Router, routing::any};
use std::{net::SocketAddr, sync::Arc};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

pub const ETYMOLOGY_PATH: &str = "/api/get-etymology";

/// Builds the proxy router. Every method is routed to the handler so that
/// non-GET requests get the JSON 405 body rather than axum's empty one.
pub fn router(state: handlers::AppState) -> Router {
    Router::new()
        .route(ETYMOLOGY_PATH, any(handlers::get_etymology))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

pub fn app_state(config: &Config, llm: Arc<dyn LlmClient>) -> handlers::AppState {
    handlers::AppState {
        etymology: EtymologyService::new(llm).with_temperature(config.llm.temperature),
    }
}

pub async fn run(config: Config) -> Result<()> {
    config.validate_for_server()?;

    let llm: Arc<dyn LlmClient> = Arc::new(OpenAiClient::new(config.llm.clone()));
    info!("Using model {} at {}", config.llm.model, config.llm.base_url);

    let app = router(app_state(&config, llm));

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
