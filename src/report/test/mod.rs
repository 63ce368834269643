//! Report engine tests: shared doubles and row helpers.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::{DatabaseConnection, DbErr};
use serde_json::Value;

use crate::data::reference::ReferenceSource;
use crate::model::report::{RawReportRow, ReferenceRecord};

mod export;
mod sla;

/// Builds a raw report row from a JSON object literal.
fn row(value: Value) -> RawReportRow {
    value
        .as_object()
        .cloned()
        .expect("row literal must be a JSON object")
}

/// Builds a reference record from a JSON object literal.
fn record(value: Value) -> ReferenceRecord {
    value
        .as_object()
        .cloned()
        .expect("record literal must be a JSON object")
}

/// Reference source that fails the test when touched. Used to prove that a
/// resolution path is never taken.
struct PanickingSource;

#[async_trait]
impl ReferenceSource for PanickingSource {
    async fn fetch_by_ids(
        &self,
        _db: &DatabaseConnection,
        _ids: &[i32],
    ) -> Result<HashMap<i32, ReferenceRecord>, DbErr> {
        panic!("unexpected reference fetch");
    }

    async fn fetch_relation_value(
        &self,
        _db: &DatabaseConnection,
        _id: i32,
        _relation: &str,
        _field: &str,
    ) -> Result<Option<String>, DbErr> {
        panic!("unexpected relation fetch");
    }
}

/// Wraps a real source and counts calls, for asserting query budgets.
struct CountingSource<S> {
    inner: S,
    fetches: Arc<AtomicUsize>,
    relation_fetches: Arc<AtomicUsize>,
}

impl<S> CountingSource<S> {
    fn new(inner: S) -> (Self, Arc<AtomicUsize>, Arc<AtomicUsize>) {
        let fetches = Arc::new(AtomicUsize::new(0));
        let relation_fetches = Arc::new(AtomicUsize::new(0));
        (
            Self {
                inner,
                fetches: fetches.clone(),
                relation_fetches: relation_fetches.clone(),
            },
            fetches,
            relation_fetches,
        )
    }
}

#[async_trait]
impl<S: ReferenceSource> ReferenceSource for CountingSource<S> {
    async fn fetch_by_ids(
        &self,
        db: &DatabaseConnection,
        ids: &[i32],
    ) -> Result<HashMap<i32, ReferenceRecord>, DbErr> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        self.inner.fetch_by_ids(db, ids).await
    }

    async fn fetch_relation_value(
        &self,
        db: &DatabaseConnection,
        id: i32,
        relation: &str,
        field: &str,
    ) -> Result<Option<String>, DbErr> {
        self.relation_fetches.fetch_add(1, Ordering::SeqCst);
        self.inner.fetch_relation_value(db, id, relation, field).await
    }
}
