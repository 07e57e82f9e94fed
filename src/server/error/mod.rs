//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into JSON error responses. The `AppError` enum is the top-level
//! error type returned by every controller; it wraps domain-specific errors and
//! implements `IntoResponse` so failures never escape the request boundary.

pub mod config;
pub mod container;
pub mod internal;

use axum::{
    extract::rejection::{PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{config::ConfigError, container::ContainerError, internal::InternalError},
};

/// Top-level application error type.
///
/// Most variants use `#[from]` for automatic error conversion with `?`. `NotFound` and
/// `BadRequest` carry a message returned verbatim to the client; everything else is a
/// 500 whose body carries the underlying error text.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Database operation error from SeaORM.
    ///
    /// Covers both an unreachable store and a failing query.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Container runtime missing, timed out or failed.
    #[error(transparent)]
    ContainerErr(#[from] ContainerError),

    /// Unexpected failure inside the server itself.
    #[error(transparent)]
    InternalErr(#[from] InternalError),

    /// Listener or socket error while serving.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Resource not found error.
    ///
    /// Results in 404 Not Found with the provided error message.
    #[error("{0}")]
    NotFound(String),

    /// Invalid request error.
    ///
    /// Results in 400 Bad Request with the provided error message.
    #[error("{0}")]
    BadRequest(String),
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For `BadRequest` variant
/// - 404 Not Found - For `NotFound` variant
/// - 500 Internal Server Error - For all other error types
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound(msg) => {
                (StatusCode::NOT_FOUND, Json(ErrorDto { error: msg })).into_response()
            }
            Self::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, Json(ErrorDto { error: msg })).into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// The dashboard is an operator tool, so the error text is returned to the client as
/// well as logged.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        let message = self.0.to_string();
        tracing::error!("{}", message);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto { error: message }),
        )
            .into_response()
    }
}
