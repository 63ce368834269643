//! Row materialization: the orchestrating pass over rows and columns.

use sea_orm::DatabaseConnection;
use serde_json::Value;

use crate::{
    data::reference::ReferenceDomainRegistry,
    error::report::ReportError,
    model::report::{ContextMap, MaterializedRow, RawReportRow, ReportColumnSpec},
    report::{cache::load_reference_cache, relation::RelationResolver, resolve::resolve_column},
};

/// Materializes every raw row against the requested column specs.
///
/// Builds the reference cache first, then walks rows in input order and
/// columns in requested order, so two runs over the same input produce
/// identical output. Cells that resolve to nothing (null raw value, missing
/// reference row) materialize as empty strings; the flat record always
/// carries every requested column. An empty row set is the "no records"
/// signal, not an empty report.
pub async fn materialize_rows(
    db: &DatabaseConnection,
    registry: &ReferenceDomainRegistry,
    rows: &[RawReportRow],
    specs: &[&ReportColumnSpec],
    user_context: &ContextMap,
    case_context: &ContextMap,
) -> Result<Vec<MaterializedRow>, ReportError> {
    if rows.is_empty() {
        return Err(ReportError::NoRecords);
    }

    let cache = load_reference_cache(db, registry, rows, specs).await?;
    let mut relations = RelationResolver::new(db, registry);

    let mut materialized = Vec::with_capacity(rows.len());
    for row in rows {
        let mut record = MaterializedRow::new();
        for spec in specs {
            let value =
                resolve_column(row, spec, &cache, user_context, case_context, &mut relations)
                    .await?;
            record.insert(
                spec.name.to_string(),
                Value::String(value.unwrap_or_default()),
            );
        }
        materialized.push(record);
    }

    Ok(materialized)
}
