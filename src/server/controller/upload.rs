use axum::{
    extract::{multipart::MultipartRejection, Multipart, State},
    Json,
};
use dioxus_logger::tracing;

use crate::{
    model::upload::{ThesisUploadForm, UploadResponseDto},
    server::{
        error::upload::UploadError,
        model::upload::{FileKind, ThesisUpload, UploadedFile},
        service::upload::UploadService,
        state::AppState,
    },
};

/// Tag for grouping upload endpoints in OpenAPI documentation
pub static UPLOAD_TAG: &str = "upload";

/// Multipart part carrying the thesis description.
const INFO_FIELD: &str = "thesis_info";

/// Upload a thesis for moderation.
///
/// Accepts the thesis text, optional slides and reviews, and a `thesis_info` JSON file
/// describing the work. Accepted theses are stored as temporary until a moderator
/// publishes them.
///
/// # Access Control
/// The `secret_key` inside `thesis_info` must match the configured thesis secret.
///
/// # Returns
/// Always `200 OK` with a JSON body:
/// - `{"status": 0, "string": "Success"}` - Thesis stored for moderation
/// - `{"status": 500, "string": <reason>}` - Upload rejected
#[utoipa::path(
    post,
    path = "/post_theses",
    tag = UPLOAD_TAG,
    request_body(content = ThesisUploadForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Upload outcome; inspect the `status` field", body = UploadResponseDto)
    ),
)]
pub async fn post_theses(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<UploadResponseDto>, UploadError> {
    let multipart = multipart.map_err(|e| UploadError::Multipart(e.body_text()))?;
    let upload = read_upload(multipart).await?;

    let thesis = UploadService::new(&state.db, &state.storage, &state.config)
        .upload(upload)
        .await?;
    tracing::info!("Received thesis {} by {}", thesis.id, thesis.author);

    Ok(Json(UploadResponseDto::success()))
}

/// Collects the known parts of the request.
///
/// File parts sent without a file name and without content are what browsers submit for
/// empty file inputs, so they count as missing.
async fn read_upload(mut multipart: Multipart) -> Result<ThesisUpload, UploadError> {
    let mut upload = ThesisUpload::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| UploadError::Multipart(e.body_text()))?
    {
        let Some(name) = field.name().map(str::to_string) else {
            continue;
        };
        let file_name = field.file_name().unwrap_or_default().to_string();
        let bytes = field
            .bytes()
            .await
            .map_err(|e| UploadError::Multipart(e.body_text()))?;

        if name == INFO_FIELD {
            if !bytes.is_empty() {
                upload.info = Some(bytes.to_vec());
            }
            continue;
        }

        let Some(kind) = FileKind::from_field_name(&name) else {
            tracing::debug!("Ignoring unknown upload part '{}'", name);
            continue;
        };
        if file_name.is_empty() && bytes.is_empty() {
            continue;
        }

        upload.set_file(
            kind,
            UploadedFile {
                file_name,
                bytes: bytes.to_vec(),
            },
        );
    }

    Ok(upload)
}
