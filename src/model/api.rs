use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::report::{ContextMap, MaterializedRow, RawReportRow};

#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    pub error: String,
}

/// Failure shape of the report endpoints, e.g.
/// `{"success": false, "error": "No Records Found"}`.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ReportErrorDto {
    pub success: bool,
    pub error: String,
}

/// Request body for report materialization: the requested catalog column ids,
/// the raw rows produced upstream, and the precomputed user/case contexts.
#[derive(Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MaterializeReportDto {
    pub column_ids: Vec<i32>,
    #[schema(value_type = Vec<Object>)]
    pub rows: Vec<RawReportRow>,
    #[serde(default)]
    #[schema(value_type = Object)]
    pub user_context: ContextMap,
    #[serde(default)]
    #[schema(value_type = Object)]
    pub case_context: ContextMap,
}

/// Materialized report: resolved rows in input order, each an ordered map of
/// output column name to display string.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct MaterializedReportDto {
    pub columns: Vec<String>,
    #[schema(value_type = Vec<Object>)]
    pub rows: Vec<MaterializedRow>,
}

/// Export response wrapping the rendered spreadsheet buffer.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ExportDto {
    pub success: bool,
    pub message: String,
    pub format: String,
    pub data: String,
}
