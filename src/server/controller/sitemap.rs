use axum::{
    extract::State,
    http::header,
    response::IntoResponse,
};

use crate::server::{service::sitemap::render_sitemap, site::PUBLIC_PAGES, state::AppState};

/// XML sitemap of every public page, dated today.
pub async fn sitemap(State(state): State<AppState>) -> impl IntoResponse {
    let today = chrono::Local::now().date_naive();

    (
        [(header::CONTENT_TYPE, "application/xml")],
        render_sitemap(&state.config.site_url, &PUBLIC_PAGES, today),
    )
}
