pub mod handlers;
mod types;

pub use handlers::AppState;
pub use types::{AskResponse, ErrorResponse, HealthResponse};

use crate::{Result, config::Config, llm::OpenAiClient};
use axum::{
    Router,
    routing::{any, get},
};
use std::{net::SocketAddr, sync::Arc};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/ask", any(handlers::ask))
        .route("/health", get(handlers::health))
        .fallback(handlers::not_found)
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        .with_state(state)
}

pub async fn run(config: Config) -> Result<()> {
    let client = OpenAiClient::new(config.upstream.endpoint.clone());
    info!(
        "Forwarding questions to {} using model {}",
        client.endpoint(),
        config.upstream.model
    );

    if config.upstream.api_key().is_none() {
        warn!("OPENAI_API_KEY is not set; /api/ask will answer 500 until it is");
    }

    let app = router(AppState::new(Arc::new(client), config.upstream.clone()));

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
