//! Rejections of the thesis upload endpoint.
//!
//! Each variant's message is part of the upload client contract and is returned verbatim
//! in the `string` field of the JSON response.

use axum::{
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::{model::upload::UploadResponseDto, server::error::storage::StorageError};

#[derive(Error, Debug)]
pub enum UploadError {
    #[error("No thesis text found.")]
    MissingText,

    #[error("No thesis_info found.")]
    MissingInfo,

    #[error("Invalid thesis_info: {0}")]
    InvalidInfo(String),

    #[error("Key '{0}' not found")]
    MissingKey(&'static str),

    #[error("Key '{0}' has invalid value")]
    InvalidKey(&'static str),

    #[error("Invalid secret key: {0}")]
    InvalidSecret(String),

    #[error("Wrong type_id: {0}")]
    WrongType(i64),

    #[error("Wrong course_id: {0}")]
    WrongCourse(i64),

    #[error("Can't find supervisor: {0}")]
    SupervisorNotFound(String),

    #[error("Work already exists: {0}")]
    AlreadyExists(String),

    #[error("Malformed multipart request: {0}")]
    Multipart(String),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Db(#[from] sea_orm::DbErr),
}

/// Converts upload rejections into the `{status, string}` JSON body.
///
/// Validation failures echo their message. Storage and database failures are logged and
/// reported with a generic message.
impl IntoResponse for UploadError {
    fn into_response(self) -> Response {
        let message = match &self {
            Self::Storage(_) | Self::Db(_) => {
                tracing::error!("Thesis upload failed: {}", self);
                "Internal server error".to_string()
            }
            err => {
                tracing::info!("Thesis upload rejected: {}", err);
                err.to_string()
            }
        };

        Json(UploadResponseDto::error(message)).into_response()
    }
}
