//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into appropriate HTTP responses. The `AppError` enum serves
//! as the top-level error type that wraps domain-specific errors and implements
//! `IntoResponse` for automatic error handling in route handlers. The upload endpoint
//! has its own `UploadError` because it answers every failure with a JSON status body.

pub mod auth;
pub mod config;
pub mod form;
pub mod storage;
pub mod upload;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{auth::AuthError, config::ConfigError, form::FormError, storage::StorageError},
    view,
};

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application and provides
/// automatic conversion to HTTP responses. Domain-specific errors like `AuthError` handle
/// their own response mapping, while generic variants provide standard HTTP status codes.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Basic authentication failure.
    ///
    /// Delegates to `AuthError::into_response()` which issues the 401 challenge.
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// Thesis file storage error.
    ///
    /// Results in 500 Internal Server Error with error details logged server-side.
    #[error(transparent)]
    StorageErr(#[from] StorageError),

    /// Invalid admin form submission.
    ///
    /// Admin handlers intercept this variant to re-render the form; anywhere else it
    /// results in 422 Unprocessable Entity.
    #[error(transparent)]
    FormErr(#[from] FormError),

    /// Database operation error from SeaORM.
    ///
    /// Results in 500 Internal Server Error with error details logged server-side.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Filesystem or socket error outside of thesis storage.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Resource not found error.
    ///
    /// Results in the 404 page.
    #[error("{0}")]
    NotFound(String),

    /// Invalid request error.
    ///
    /// Results in 400 Bad Request with the provided error message.
    #[error("{0}")]
    BadRequest(String),

    /// Internal server error with custom message.
    ///
    /// Results in 500 Internal Server Error. The provided message is logged
    /// but a generic message is returned to the client.
    #[error("{0}")]
    InternalError(String),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For `BadRequest` variant
/// - 401 Unauthorized - For `AuthErr`, delegated to `AuthError::into_response()`
/// - 404 Not Found - For `NotFound` variant, rendered as the site's 404 page
/// - 422 Unprocessable Entity - For `FormErr`
/// - 500 Internal Server Error - For all other error types
impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        match self {
            Self::AuthErr(err) => err.into_response(),
            Self::NotFound(msg) => {
                tracing::debug!("Not found: {}", msg);
                (StatusCode::NOT_FOUND, view::not_found_page()).into_response()
            }
            Self::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, Json(ErrorDto { error: msg })).into_response()
            }
            Self::FormErr(err) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(ErrorDto {
                    error: err.to_string(),
                }),
            )
                .into_response(),
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

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic "Internal server error" message to the
/// client to avoid leaking implementation details.
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
