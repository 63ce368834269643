//! Error types and HTTP response handling.
//!
//! `AppError` is the top-level error type that wraps domain-specific errors
//! and implements `IntoResponse` for automatic error handling in API
//! endpoints. Report-level resolution gaps (missing reference rows, null
//! cells, unregistered domains) never reach this layer; they are absorbed
//! inside the materialization engine. Only infrastructure failures and the
//! empty-input signal surface here.

pub mod config;
pub mod report;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    error::{config::ConfigError, report::ReportError},
    model::api::ErrorDto,
};

/// Top-level application error type.
///
/// Most variants use `#[from]` for automatic conversion. `ReportError`
/// handles its own response mapping (the "no records" signal is a 404 with a
/// `{success: false, error}` body), while generic variants map to standard
/// HTTP status codes.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Report materialization error; delegates to
    /// `ReportError::into_response()` for status mapping.
    #[error(transparent)]
    ReportErr(#[from] ReportError),

    /// Database operation error from SeaORM.
    ///
    /// Results in 500 Internal Server Error with details logged server-side;
    /// a partially resolved report would silently corrupt output, so
    /// upstream failures abort the whole run.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// SQLx database driver error.
    #[error(transparent)]
    SqlxErr(#[from] sea_orm::SqlxError),

    /// I/O error during startup (binding the listener, serving).
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Resource not found; results in 404 with the provided message.
    #[error("{0}")]
    NotFound(String),

    /// Invalid request; results in 400 with the provided message.
    #[error("{0}")]
    BadRequest(String),

    /// Internal server error with custom message. The message is logged but
    /// a generic body is returned to the client.
    #[error("{0}")]
    InternalError(String),
}

/// Converts application errors into HTTP responses.
///
/// Internal errors are logged with full details but return generic messages
/// to avoid information leakage.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::ReportErr(err) => err.into_response(),
            Self::NotFound(msg) => {
                (StatusCode::NOT_FOUND, Json(ErrorDto { error: msg })).into_response()
            }
            Self::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, Json(ErrorDto { error: msg })).into_response()
            }
            Self::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorDto {
                        error: "Internal server error".to_string(),
                    }),
                )
                    .into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal
/// Server Error response with a generic body.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
