//! Application state shared across all request handlers.
//!
//! Initialized once during startup and cloned cheaply per request through
//! Axum's state extraction: the database connection is a pool, the registry
//! and the exporter are reference-counted.

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::{data::reference::ReferenceDomainRegistry, report::export::ReportExporter};

#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for the reference tables and SLA thresholds.
    pub db: DatabaseConnection,

    /// Static wiring of reference domain name to capability implementation,
    /// built at process start and read-only thereafter.
    pub registry: Arc<ReferenceDomainRegistry>,

    /// Export adapter collaborator rendering materialized reports.
    pub exporter: Arc<dyn ReportExporter>,
}

impl AppState {
    pub fn new(
        db: DatabaseConnection,
        registry: Arc<ReferenceDomainRegistry>,
        exporter: Arc<dyn ReportExporter>,
    ) -> Self {
        Self {
            db,
            registry,
            exporter,
        }
    }
}
