//! Static site build.
//!
//! Every frozen path is requested through the application router and the response body
//! is written below the destination directory. The static directory is copied alongside,
//! without the upload staging area.

use std::path::{Path, PathBuf};

use axum::{
    body::{to_bytes, Body},
    http::Request,
    Router,
};
use dioxus_logger::tracing;
use tower::ServiceExt;
use walkdir::WalkDir;

use crate::server::{error::AppError, site::frozen_paths, storage::Area};

/// Writes the static site to `destination`.
///
/// # Returns
/// - `Ok(usize)` - Number of pages written
/// - `Err(AppError::InternalError)` - A page did not render successfully
/// - `Err(AppError::IoErr)` - Reading the static directory or writing output failed
pub async fn freeze(router: Router, static_dir: &Path, destination: &Path) -> Result<usize, AppError> {
    let mut pages = 0;

    for path in frozen_paths() {
        let request = Request::get(path)
            .body(Body::empty())
            .map_err(|e| AppError::InternalError(e.to_string()))?;
        let response = router
            .clone()
            .oneshot(request)
            .await
            .map_err(|e| AppError::InternalError(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::InternalError(format!(
                "Page {} responded with {}",
                path, status
            )));
        }

        let body = to_bytes(response.into_body(), usize::MAX)
            .await
            .map_err(|e| AppError::InternalError(e.to_string()))?;

        let target = output_path(destination, path);
        if let Some(parent) = target.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(&target, body).await?;
        tracing::debug!("Froze {} into {}", path, target.display());
        pages += 1;
    }

    let files = copy_static(static_dir, destination).await?;
    tracing::info!(
        "Built {} pages and {} static files into {}",
        pages,
        files,
        destination.display()
    );

    Ok(pages)
}

/// File a frozen path is written to; the site root becomes `index.html`.
fn output_path(destination: &Path, path: &str) -> PathBuf {
    match path.trim_start_matches('/') {
        "" => destination.join("index.html"),
        relative => destination.join(relative),
    }
}

async fn copy_static(static_dir: &Path, destination: &Path) -> Result<usize, AppError> {
    let mut copied = 0;
    let entries = WalkDir::new(static_dir)
        .into_iter()
        .filter_entry(|entry| entry.depth() != 1 || entry.file_name() != Area::Staging.dir_name());

    for entry in entries {
        let entry = entry.map_err(std::io::Error::from)?;
        if !entry.file_type().is_file() {
            continue;
        }

        let relative = entry
            .path()
            .strip_prefix(static_dir)
            .map_err(|e| AppError::InternalError(e.to_string()))?;
        let target = destination.join(relative);
        if let Some(parent) = target.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::copy(entry.path(), &target).await?;
        copied += 1;
    }

    Ok(copied)
}
