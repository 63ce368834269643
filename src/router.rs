use axum::{routing::post, Router};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    controller::report::{export_report, materialize_report},
    model::api::{
        ErrorDto, ExportDto, MaterializeReportDto, MaterializedReportDto, ReportErrorDto,
    },
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::controller::report::materialize_report,
        crate::controller::report::export_report,
    ),
    components(schemas(
        ErrorDto,
        ExportDto,
        MaterializeReportDto,
        MaterializedReportDto,
        ReportErrorDto,
    ))
)]
struct ApiDoc;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/reports/master", post(materialize_report))
        .route("/api/reports/master/export", post(export_report))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
