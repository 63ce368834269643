//! Per-cell column value resolution.
//!
//! `resolve_column` applies the resolution strategies in strict precedence:
//! null cells propagate as absent before anything else is attempted, then
//! relation columns, direct reference lookups, user/case context lookups,
//! and finally field-type formatting for unmapped columns. Missing reference
//! rows and unknown fields resolve to empty strings, never errors; sparse
//! reference data must not block a report.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use sea_orm::DbErr;
use serde_json::Value;

use crate::{
    model::report::{ContextMap, FieldType, RawReportRow, ReportColumnSpec, TargetDomain},
    report::{cache::ReferenceCache, relation::RelationResolver},
};

/// Resolves the display value of one column for one row. `Ok(None)` means
/// the raw cell was null or absent; no lookup is attempted in that case,
/// relation column or not.
pub async fn resolve_column(
    row: &RawReportRow,
    spec: &ReportColumnSpec,
    cache: &ReferenceCache,
    user_context: &ContextMap,
    case_context: &ContextMap,
    relations: &mut RelationResolver<'_>,
) -> Result<Option<String>, DbErr> {
    let raw = match row.get(spec.field) {
        Some(value) if !value.is_null() => value,
        _ => return Ok(None),
    };

    if spec.has_mapping && spec.target_domain == TargetDomain::Reference && spec.has_relation {
        let (Some(table), Some(relation), Some(field)) =
            (spec.relation_table, spec.relation_name, spec.relation_field)
        else {
            return Ok(Some(String::new()));
        };
        let Some(id) = value_as_id(raw) else {
            return Ok(Some(String::new()));
        };
        return Ok(Some(relations.resolve(table, id, relation, field).await?));
    }

    if spec.has_mapping && spec.target_domain == TargetDomain::Reference {
        return Ok(Some(lookup_reference(raw, spec, cache)));
    }

    if spec.has_mapping && spec.target_domain == TargetDomain::User {
        return Ok(Some(lookup_context(raw, spec, user_context)));
    }

    if spec.has_mapping && spec.target_domain == TargetDomain::Case {
        return Ok(Some(lookup_context(raw, spec, case_context)));
    }

    Ok(Some(format_raw(raw, spec.field_type)))
}

fn lookup_reference(raw: &Value, spec: &ReportColumnSpec, cache: &ReferenceCache) -> String {
    let Some(domain) = spec.target_table else {
        return String::new();
    };
    let Some(id) = value_as_id(raw) else {
        return String::new();
    };

    cache
        .get(domain, id)
        .and_then(|record| record.get(spec.target_field))
        .map(value_to_display)
        .unwrap_or_default()
}

fn lookup_context(raw: &Value, spec: &ReportColumnSpec, context: &ContextMap) -> String {
    let Some(domain) = spec.target_table else {
        return String::new();
    };
    let Some(id) = value_as_id(raw) else {
        return String::new();
    };

    context
        .get(domain)
        .and_then(|records| records.get(&id))
        .and_then(|record| record.get(spec.target_field))
        .map(value_to_display)
        .unwrap_or_default()
}

/// Formats an unmapped raw value per its declared field type.
pub fn format_raw(raw: &Value, field_type: FieldType) -> String {
    match field_type {
        FieldType::Raw => value_to_display(raw),
        FieldType::DateTime => parse_timestamp(raw)
            .map(|dt| dt.format("%d/%m/%Y %H:%M:%S").to_string())
            .unwrap_or_else(|| value_to_display(raw)),
        FieldType::Date => parse_timestamp(raw)
            .map(|dt| dt.format("%d/%m/%Y").to_string())
            .unwrap_or_else(|| value_to_display(raw)),
        FieldType::Boolean => format_boolean(raw).to_string(),
    }
}

/// "Yes" for every truthy-nonzero value; only numeric zero (and false) maps
/// to "No".
pub fn format_boolean(raw: &Value) -> &'static str {
    let is_zero = match raw {
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.trim().parse::<f64>().map_or(false, |v| v == 0.0),
        _ => false,
    };

    if is_zero {
        "No"
    } else {
        "Yes"
    }
}

/// Extracts a reference id from a raw cell. Ids arrive as JSON numbers or
/// numeric strings.
pub fn value_as_id(raw: &Value) -> Option<i32> {
    match raw {
        Value::Number(n) => n.as_i64().and_then(|id| i32::try_from(id).ok()),
        Value::String(s) => s.parse().ok(),
        _ => None,
    }
}

/// Flattens a resolved field value into its display string.
pub fn value_to_display(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

fn parse_timestamp(raw: &Value) -> Option<DateTime<Utc>> {
    let Value::String(s) = raw else {
        return None;
    };

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S") {
        return Some(dt.and_utc());
    }
    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(d.and_hms_opt(0, 0, 0)?.and_utc());
    }

    None
}
