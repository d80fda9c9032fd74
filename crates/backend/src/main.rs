#![allow(clippy::type_complexity, clippy::too_many_arguments)]

pub mod domain;
pub mod handlers;
pub mod routes;
pub mod shared;
pub mod system;

use axum::extract::DefaultBodyLimit;
use axum::http::{header, Method};
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};

use shared::data::{AppState, CommitDelay};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    system::tracing::initialize()?;

    let config = shared::config::load_config()?;
    let delay = CommitDelay(config.commit_delay());

    let state = if config.store.seed_fixtures {
        AppState::seeded(delay).map_err(|e| anyhow::anyhow!("fixture seeding failed: {e}"))?
    } else {
        AppState::empty(delay)
    };
    tracing::info!(
        "Stores ready (fixtures: {}, commit delay: {}ms)",
        config.store.seed_fixtures,
        config.store.commit_delay_ms
    );

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]);

    let app = routes::configure_routes(state)
        .layer(DefaultBodyLimit::max(config.import.max_body_bytes))
        .layer(axum::middleware::from_fn(
            system::middleware::request_logger,
        ))
        .layer(cors);

    let addr = config.bind_address();
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("Backend listening on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
