//! One-hop relation resolution with per-run memoization.
//!
//! Relation columns cannot be served from the reference cache without either
//! loading entire related tables speculatively or paying a query per cell.
//! This resolver pays exactly one query per distinct (table, id) pair
//! actually needed; relation columns are rare relative to direct mappings,
//! so the sequential path is fine.

use std::collections::HashMap;

use sea_orm::{DatabaseConnection, DbErr};

use crate::data::reference::ReferenceDomainRegistry;

pub struct RelationResolver<'a> {
    db: &'a DatabaseConnection,
    registry: &'a ReferenceDomainRegistry,
    resolved: HashMap<(String, i32), String>,
}

impl<'a> RelationResolver<'a> {
    pub fn new(db: &'a DatabaseConnection, registry: &'a ReferenceDomainRegistry) -> Self {
        Self {
            db,
            registry,
            resolved: HashMap::new(),
        }
    }

    /// Resolves the final display value for a relation column: looks `id` up
    /// in `table`, follows `relation`, reads `field` from the related
    /// record. Absent base record, absent related record, and unregistered
    /// tables all resolve to an empty string.
    pub async fn resolve(
        &mut self,
        table: &str,
        id: i32,
        relation: &str,
        field: &str,
    ) -> Result<String, DbErr> {
        let key = (table.to_string(), id);
        if let Some(value) = self.resolved.get(&key) {
            return Ok(value.clone());
        }

        let value = match self.registry.get(table) {
            Some(source) => source
                .fetch_relation_value(self.db, id, relation, field)
                .await?
                .unwrap_or_default(),
            None => {
                tracing::warn!("Relation table '{}' is not registered, skipping", table);
                String::new()
            }
        };

        self.resolved.insert(key, value.clone());
        Ok(value)
    }

    /// Number of distinct (table, id) pairs fetched so far.
    pub fn distinct_lookups(&self) -> usize {
        self.resolved.len()
    }
}
