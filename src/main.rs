//! Case administration reporting backend.
//!
//! The one subsystem with real design content here is the report
//! materialization engine (`report`); the HTTP surface, configuration, and
//! data layers exist to feed it and serve its output.

mod config;
mod controller;
mod data;
mod error;
mod model;
mod report;
mod router;
mod service;
mod startup;
mod state;

use std::sync::Arc;

use tower_http::cors::CorsLayer;

use crate::{
    config::Config, data::reference::ReferenceDomainRegistry, error::AppError,
    report::export::CsvExporter, state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = Config::from_env()?;
    let db = startup::connect_to_database(&config).await?;

    let registry = Arc::new(ReferenceDomainRegistry::new());
    let exporter = Arc::new(CsvExporter);
    let state = AppState::new(db, registry, exporter);

    let app = router::router()
        .layer(CorsLayer::permissive())
        .with_state(state);

    let listener = tokio::net::TcpListener::bind((config.host.as_str(), config.port)).await?;
    tracing::info!("Listening on {}:{}", config.host, config.port);

    axum::serve(listener, app).await?;

    Ok(())
}
