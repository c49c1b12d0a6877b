pub mod handlers;
mod page;
mod types;

pub use handlers::AppState;
pub use types::*;

use crate::{Result, config::Config, validator::Validator};
use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use std::{net::SocketAddr, sync::Arc};
use tower_http::trace::TraceLayer;
use tracing::info;

pub fn router(state: AppState, max_upload_bytes: usize) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/health", get(handlers::health))
        .route("/api/preview", post(handlers::preview))
        .route("/api/validate", post(handlers::validate))
        .route("/api/validate/upload", post(handlers::validate_upload))
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run(config: Config) -> Result<()> {
    let validator = Validator::new(&config.llm)?;

    let app_state = AppState {
        validator: Arc::new(validator),
    };

    let app = router(app_state, config.server.max_upload_bytes);

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
