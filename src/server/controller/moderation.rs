use std::collections::HashMap;

use axum::{
    extract::{Path, Query, Request, State},
    http::{HeaderMap, Uri},
    response::{Html, IntoResponse, Redirect, Response},
};
use dioxus_logger::tracing;
use tower::ServiceExt;
use tower_http::services::ServeFile;

use crate::{
    server::{
        error::AppError,
        middleware::auth::BasicAuthGuard,
        model::upload::FileKind,
        service::moderation::ModerationService,
        state::AppState,
        storage::Area,
        util::parse::parse_or,
    },
    view::{
        self,
        route::theses::{ModerationPage, ModerationPageProps},
        PageContext,
    },
};

const MODERATION_PAGE: &str = "/theses_tmp.html";

/// Thesis acted on when the request names none.
const DEFAULT_THESIS_ID: i32 = 1;

/// Lists uploaded theses waiting for moderation.
///
/// # Access Control
/// Staff credentials via HTTP basic authentication.
pub async fn theses_tmp(
    State(state): State<AppState>,
    headers: HeaderMap,
    uri: Uri,
) -> Result<Html<String>, AppError> {
    BasicAuthGuard::new(&state.config, &headers).require()?;

    let theses = ModerationService::new(&state.db, &state.storage)
        .get_pending()
        .await?;

    Ok(view::render(
        ModerationPage,
        ModerationPageProps {
            ctx: PageContext::for_path(uri.path()),
            theses,
        },
    ))
}

/// Deletes an uploaded thesis together with its files.
///
/// # Access Control
/// Staff credentials via HTTP basic authentication.
pub async fn theses_delete_tmp(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<HashMap<String, String>>,
) -> Result<Redirect, AppError> {
    BasicAuthGuard::new(&state.config, &headers).require()?;

    let id = thesis_id(&query);
    if !ModerationService::new(&state.db, &state.storage)
        .delete(id)
        .await?
    {
        tracing::debug!("No temporary thesis {} to delete", id);
    }

    Ok(Redirect::to(MODERATION_PAGE))
}

/// Publishes an uploaded thesis.
///
/// # Access Control
/// Staff credentials via HTTP basic authentication.
pub async fn theses_add_tmp(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<HashMap<String, String>>,
) -> Result<Redirect, AppError> {
    BasicAuthGuard::new(&state.config, &headers).require()?;

    let id = thesis_id(&query);
    if !ModerationService::new(&state.db, &state.storage)
        .publish(id)
        .await?
    {
        tracing::debug!("No temporary thesis {} to publish", id);
    }

    Ok(Redirect::to(MODERATION_PAGE))
}

/// Serves a file of a thesis awaiting moderation, e.g. `/tmp/texts/Ivanov_text.pdf`.
///
/// # Access Control
/// Staff credentials via HTTP basic authentication.
pub async fn staged_file(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(path): Path<String>,
    request: Request,
) -> Result<Response, AppError> {
    BasicAuthGuard::new(&state.config, &headers).require()?;

    let not_found = || AppError::NotFound(format!("No staged file {}", path));
    let (dir, name) = path.split_once('/').ok_or_else(not_found)?;
    let kind = FileKind::ALL
        .into_iter()
        .find(|kind| kind.dir_name() == dir)
        .ok_or_else(not_found)?;
    let file = state
        .storage
        .path(Area::Staging, kind, name)
        .map_err(|_| not_found())?;

    if !tokio::fs::try_exists(&file).await.unwrap_or(false) {
        return Err(not_found());
    }

    match ServeFile::new(file).oneshot(request).await {
        Ok(response) => Ok(response.into_response()),
        Err(never) => match never {},
    }
}

fn thesis_id(query: &HashMap<String, String>) -> i32 {
    parse_or(
        query.get("thesis_id").map(String::as_str),
        DEFAULT_THESIS_ID,
    )
}
