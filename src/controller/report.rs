use axum::{extract::State, response::IntoResponse, Json};

use crate::{
    error::AppError,
    model::api::{ErrorDto, ExportDto, MaterializeReportDto, MaterializedReportDto, ReportErrorDto},
    service::report::ReportService,
    state::AppState,
};

/// Tag for grouping report endpoints in OpenAPI documentation
pub static REPORT_TAG: &str = "report";

/// Materialize a master report.
///
/// Resolves the requested catalog columns against the supplied raw rows:
/// reference ids become display values (through the reference cache and, for
/// relation columns, one further hop), user/case ids are looked up in the
/// supplied context maps, unmapped fields are formatted per their field
/// type, and elapsed-time columns get their SLA status classified first.
///
/// # Arguments
/// - `state` - Application state containing the database connection and
///   reference domain registry
/// - `payload` - Requested column ids, raw rows, and lookup contexts
///
/// # Returns
/// - `200 OK` - The materialized rows, in input order
/// - `400 Bad Request` - No valid column ids requested
/// - `404 Not Found` - Empty row set ("No Records Found")
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/reports/master",
    tag = REPORT_TAG,
    request_body = MaterializeReportDto,
    responses(
        (status = 200, description = "Successfully materialized report", body = MaterializedReportDto),
        (status = 400, description = "No valid column ids requested", body = ErrorDto),
        (status = 404, description = "No records found", body = ReportErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn materialize_report(
    State(state): State<AppState>,
    Json(payload): Json<MaterializeReportDto>,
) -> Result<impl IntoResponse, AppError> {
    let report = ReportService::new(&state.db, &state.registry)
        .materialize(
            &payload.column_ids,
            payload.rows,
            &payload.user_context,
            &payload.case_context,
        )
        .await?;

    Ok(Json(report.into_dto()))
}

/// Materialize and export a master report.
///
/// Same resolution pipeline as `materialize_report`, then renders the flat
/// records through the configured export adapter and wraps the buffer in a
/// `{success, message, format, data}` envelope.
///
/// # Arguments
/// - `state` - Application state containing the database connection,
///   reference domain registry, and export adapter
/// - `payload` - Requested column ids, raw rows, and lookup contexts
///
/// # Returns
/// - `200 OK` - The rendered export buffer
/// - `400 Bad Request` - No valid column ids requested
/// - `404 Not Found` - Empty row set ("No Records Found")
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/reports/master/export",
    tag = REPORT_TAG,
    request_body = MaterializeReportDto,
    responses(
        (status = 200, description = "Successfully exported report", body = ExportDto),
        (status = 400, description = "No valid column ids requested", body = ErrorDto),
        (status = 404, description = "No records found", body = ReportErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn export_report(
    State(state): State<AppState>,
    Json(payload): Json<MaterializeReportDto>,
) -> Result<impl IntoResponse, AppError> {
    let export = ReportService::new(&state.db, &state.registry)
        .export(
            &payload.column_ids,
            payload.rows,
            &payload.user_context,
            &payload.case_context,
            state.exporter.as_ref(),
        )
        .await?;

    Ok(Json(export))
}
