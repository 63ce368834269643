//! Reference cache and its loader.
//!
//! The cache is built once per report run, before any column resolution
//! begins, and is read-only afterwards. The loader issues exactly one fetch
//! per referenced domain, covering only the ids that actually appear in the
//! raw rows; a domain nobody references is never touched.

use std::collections::{BTreeSet, HashMap};

use sea_orm::{DatabaseConnection, DbErr};

use crate::{
    data::reference::ReferenceDomainRegistry,
    model::report::{RawReportRow, ReferenceRecord, ReportColumnSpec, TargetDomain},
    report::resolve::value_as_id,
};

/// Request-scoped snapshot of resolved reference rows: domain name to row id
/// to attribute record.
#[derive(Debug, Default)]
pub struct ReferenceCache {
    domains: HashMap<String, HashMap<i32, ReferenceRecord>>,
}

impl ReferenceCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts the records of one domain. Used by the loader and by tests
    /// that assemble a cache by hand.
    pub fn insert_domain(
        &mut self,
        domain: impl Into<String>,
        records: HashMap<i32, ReferenceRecord>,
    ) {
        self.domains.insert(domain.into(), records);
    }

    /// Looks up one reference record. Absent domains and absent ids both
    /// yield `None`; neither is an error.
    pub fn get(&self, domain: &str, id: i32) -> Option<&ReferenceRecord> {
        self.domains.get(domain)?.get(&id)
    }
}

/// Bulk-loads the reference cache for one report run.
///
/// Collects, per directly-mapped reference domain in `specs`, the distinct
/// ids appearing in `rows`, then fetches each non-empty id set in a single
/// query. Domains declared by a spec but missing from the registry are
/// skipped with a warning; upstream specs may reference more domains than
/// are wired. A failed fetch aborts the run.
pub async fn load_reference_cache(
    db: &DatabaseConnection,
    registry: &ReferenceDomainRegistry,
    rows: &[RawReportRow],
    specs: &[&ReportColumnSpec],
) -> Result<ReferenceCache, DbErr> {
    let mut ids_by_domain: HashMap<&str, BTreeSet<i32>> = HashMap::new();

    for spec in specs {
        if !spec.has_mapping || spec.target_domain != TargetDomain::Reference || spec.has_relation
        {
            continue;
        }
        let Some(domain) = spec.target_table else {
            continue;
        };

        let ids = ids_by_domain.entry(domain).or_default();
        for row in rows {
            if let Some(id) = row.get(spec.field).and_then(value_as_id) {
                ids.insert(id);
            }
        }
    }

    let mut cache = ReferenceCache::new();

    for (domain, ids) in ids_by_domain {
        if ids.is_empty() {
            continue;
        }

        let Some(source) = registry.get(domain) else {
            tracing::warn!("Reference domain '{}' is not registered, skipping", domain);
            continue;
        };

        let ids: Vec<i32> = ids.into_iter().collect();
        let records = source.fetch_by_ids(db, &ids).await?;
        cache.insert_domain(domain, records);
    }

    Ok(cache)
}
