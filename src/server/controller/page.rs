use axum::{
    http::{StatusCode, Uri},
    response::{Html, IntoResponse, Redirect},
    routing::{get, MethodRouter},
};
use dioxus::prelude::Element;

use crate::{
    server::state::AppState,
    view::{self, route::StaticPageProps, PageContext},
};

/// Route serving a page without dynamic content.
///
/// The page is rendered on every request so its links match the requested path.
pub fn static_page(page: fn(StaticPageProps) -> Element) -> MethodRouter<AppState> {
    get(move |uri: Uri| async move { render_static(page, &uri) })
}

fn render_static(page: fn(StaticPageProps) -> Element, uri: &Uri) -> Html<String> {
    view::render(
        page,
        StaticPageProps {
            ctx: PageContext::for_path(uri.path()),
        },
    )
}

/// `/index.html` is an alias of the home page.
pub async fn index_alias() -> Redirect {
    Redirect::to("/")
}

/// Fallback for unknown paths.
pub async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, view::not_found_page())
}
