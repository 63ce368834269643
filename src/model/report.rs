//! Report materialization models.
//!
//! A report run takes a caller-supplied sequence of raw rows plus a selection
//! of column ids out of the static catalog (`crate::report::columns`). Each
//! `ReportColumnSpec` declares how one output column gets its display value:
//! either resolved against a reference domain (optionally through one
//! relation hop), looked up in an externally supplied user/case context, or
//! formatted directly from the raw cell.

use std::collections::HashMap;

use crate::model::api::MaterializedReportDto;

/// One raw report row as produced upstream: column name to scalar id,
/// timestamp, boolean flag, or null. Opaque to this engine except for the
/// fields named by the requested column specs.
pub type RawReportRow = serde_json::Map<String, serde_json::Value>;

/// Resolved attribute record of one reference row: field name to value.
pub type ReferenceRecord = serde_json::Map<String, serde_json::Value>;

/// One fully resolved, export-ready row: output column name to display
/// string, in requested column order.
pub type MaterializedRow = serde_json::Map<String, serde_json::Value>;

/// Externally precomputed context: domain name to row id to field map.
/// Supplied by the collaborating user/case services; never queried here.
pub type ContextMap = HashMap<String, HashMap<i32, ReferenceRecord>>;

/// A fully materialized report: requested column names in order, plus one
/// resolved row per input row.
#[derive(Debug)]
pub struct MaterializedReport {
    pub columns: Vec<String>,
    pub rows: Vec<MaterializedRow>,
}

impl MaterializedReport {
    pub fn into_dto(self) -> MaterializedReportDto {
        MaterializedReportDto {
            columns: self.columns,
            rows: self.rows,
        }
    }
}

/// Which kind of data source a mapped column resolves against.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TargetDomain {
    /// No mapping; the raw value is formatted per `FieldType`.
    None,
    /// A registered reference ("master") domain, fetched through the
    /// reference cache.
    Reference,
    /// The externally supplied user context map.
    User,
    /// The externally supplied case context map.
    Case,
}

/// Formatting applied to unmapped columns.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldType {
    /// Pass the raw value through unchanged.
    Raw,
    /// Localized date-and-time string (`DD/MM/YYYY HH:MM:SS`).
    DateTime,
    /// Localized date string (`DD/MM/YYYY`).
    Date,
    /// "Yes" unless the value is numeric zero; only `0` maps to "No".
    Boolean,
}

/// Declarative description of one output column.
///
/// Invariant: `has_relation` implies `has_mapping` and
/// `target_domain == TargetDomain::Reference`; `relation_table`,
/// `relation_name` and `relation_field` are present exactly when
/// `has_relation` is set.
#[derive(Clone, Debug)]
pub struct ReportColumnSpec {
    /// Catalog id used by callers to request the column.
    pub id: i32,
    /// Output column name in the materialized row.
    pub name: &'static str,
    /// Field of the raw row holding this column's raw value.
    pub field: &'static str,
    pub has_mapping: bool,
    pub target_domain: TargetDomain,
    /// Domain name for mapped columns (reference domain, or the key into the
    /// user/case context map).
    pub target_table: Option<&'static str>,
    /// Field to read from the resolved record when no relation is followed.
    pub target_field: &'static str,
    pub field_type: FieldType,
    pub has_relation: bool,
    /// Reference domain owning the raw id when a relation hop is needed.
    pub relation_table: Option<&'static str>,
    /// Attribute name of the one-hop relation on the base record.
    pub relation_name: Option<&'static str>,
    /// Field to read from the related record.
    pub relation_field: Option<&'static str>,
}

impl ReportColumnSpec {
    /// An unmapped column: the raw value is formatted per `field_type`.
    pub const fn unmapped(
        id: i32,
        name: &'static str,
        field: &'static str,
        field_type: FieldType,
    ) -> Self {
        Self {
            id,
            name,
            field,
            has_mapping: false,
            target_domain: TargetDomain::None,
            target_table: None,
            target_field: "",
            field_type,
            has_relation: false,
            relation_table: None,
            relation_name: None,
            relation_field: None,
        }
    }

    /// A mapped column resolved directly against a domain record.
    pub const fn mapped(
        id: i32,
        name: &'static str,
        field: &'static str,
        target_domain: TargetDomain,
        target_table: &'static str,
        target_field: &'static str,
    ) -> Self {
        Self {
            id,
            name,
            field,
            has_mapping: true,
            target_domain,
            target_table: Some(target_table),
            target_field,
            field_type: FieldType::Raw,
            has_relation: false,
            relation_table: None,
            relation_name: None,
            relation_field: None,
        }
    }

    /// A reference column resolved through one relation hop: the raw id is
    /// looked up in `relation_table`, then `relation_field` is read from the
    /// record reached via `relation_name`.
    pub const fn related(
        id: i32,
        name: &'static str,
        field: &'static str,
        relation_table: &'static str,
        relation_name: &'static str,
        relation_field: &'static str,
    ) -> Self {
        Self {
            id,
            name,
            field,
            has_mapping: true,
            target_domain: TargetDomain::Reference,
            target_table: Some(relation_table),
            target_field: "",
            field_type: FieldType::Raw,
            has_relation: true,
            relation_table: Some(relation_table),
            relation_name: Some(relation_name),
            relation_field: Some(relation_field),
        }
    }
}
