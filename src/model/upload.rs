use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Status code reported in the body of a successful upload.
pub const UPLOAD_STATUS_SUCCESS: i32 = 0;

/// Status code reported in the body of a rejected upload.
pub const UPLOAD_STATUS_ERROR: i32 = 500;

/// Body returned by the thesis upload endpoint for every outcome.
///
/// Upload clients inspect `status` rather than the HTTP status code.
#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct UploadResponseDto {
    /// `0` on success, `500` on any rejection.
    pub status: i32,
    /// Human readable outcome, `"Success"` when the thesis was accepted.
    pub string: String,
}

impl UploadResponseDto {
    pub fn success() -> Self {
        Self {
            status: UPLOAD_STATUS_SUCCESS,
            string: "Success".to_string(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: UPLOAD_STATUS_ERROR,
            string: message.into(),
        }
    }
}

/// Multipart form accepted by `POST /post_theses`.
///
/// Only used to describe the request in the OpenAPI document; the handler reads the
/// multipart stream directly.
#[allow(dead_code)]
#[derive(ToSchema)]
pub struct ThesisUploadForm {
    /// Thesis text, usually a PDF.
    #[schema(value_type = String, format = Binary)]
    pub thesis_text: Vec<u8>,
    /// Optional presentation slides.
    #[schema(value_type = Option<String>, format = Binary)]
    pub presentation: Option<Vec<u8>>,
    /// Optional supervisor review.
    #[schema(value_type = Option<String>, format = Binary)]
    pub supervisor_review: Option<Vec<u8>>,
    /// Optional reviewer review.
    #[schema(value_type = Option<String>, format = Binary)]
    pub reviewer_review: Option<Vec<u8>>,
    /// JSON document with `name_ru`, `secret_key`, `type_id`, `course_id`, `author`,
    /// `supervisor`, `publish_year` and optionally `source_uri`.
    #[schema(value_type = String, format = Binary)]
    pub thesis_info: Vec<u8>,
}
