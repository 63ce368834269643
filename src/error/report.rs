use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ReportErrorDto;

/// Errors surfaced by a report materialization run.
///
/// Resolution-level gaps (missing ids, null cells, unregistered domains) are
/// absorbed inside the engine and never appear here; sparse reference data is
/// expected and must not block export.
#[derive(Error, Debug)]
pub enum ReportError {
    /// The caller supplied no raw rows. Surfaced as a user-visible
    /// "No Records Found" result, distinct from failure.
    #[error("No Records Found")]
    NoRecords,

    /// Data-store failure while loading reference or threshold data. Aborts
    /// the whole materialization since partial output would be misleading.
    #[error(transparent)]
    Db(#[from] sea_orm::DbErr),
}

impl IntoResponse for ReportError {
    fn into_response(self) -> Response {
        match self {
            Self::NoRecords => (
                StatusCode::NOT_FOUND,
                Json(ReportErrorDto {
                    success: false,
                    error: "No Records Found".to_string(),
                }),
            )
                .into_response(),
            Self::Db(err) => {
                tracing::error!("Report materialization aborted: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ReportErrorDto {
                        success: false,
                        error: "Internal server error".to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}
