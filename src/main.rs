mod config;
mod controller;
mod data;
mod dto;
mod error;
mod middleware;
mod model;
mod router;
mod service;
mod startup;
mod state;
mod util;

use tower_http::cors::CorsLayer;
use tracing_subscriber::EnvFilter;

use crate::{config::Config, error::AppError, state::AppState};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let session_layer = startup::connect_to_session(&db).await?;
    startup::check_for_admin(&db, &config).await?;

    let app = router::router()
        .with_state(AppState::new(db))
        .layer(session_layer)
        .layer(CorsLayer::permissive());

    tracing::info!("Listening on {}", config.bind_addr);
    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
