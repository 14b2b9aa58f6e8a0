//! Server-side rendered HTML views.
//!
//! Pages are dioxus components rendered to strings with `dioxus-ssr`. Every page gets a
//! [`PageContext`] describing where it is served from, so internal links stay relative
//! and work both on the live server and in the frozen static site.

pub mod component;
pub mod route;

use axum::response::Html;
use dioxus::prelude::*;

pub const SITE_NAME: &str = "Кафедра системного программирования СПбГУ";

/// Location of the page being rendered.
#[derive(Debug, Clone, PartialEq)]
pub struct PageContext {
    /// Prefix leading from the page back to the site root, e.g. `../`.
    root: String,
    path: String,
}

impl PageContext {
    /// Context of a page served at `path`, linking relative to its depth.
    pub fn for_path(path: &str) -> Self {
        let depth = path.trim_start_matches('/').matches('/').count();

        Self {
            root: "../".repeat(depth),
            path: path.to_string(),
        }
    }

    /// Context for pages shown at arbitrary locations, linking from the site root.
    pub fn absolute() -> Self {
        Self {
            root: "/".to_string(),
            path: String::new(),
        }
    }

    /// Link to a site path such as `/theses.html`.
    pub fn href(&self, target: &str) -> String {
        let target = target.trim_start_matches('/');

        match (target.is_empty(), self.root.is_empty()) {
            (true, true) => "./".to_string(),
            _ => format!("{}{}", self.root, target),
        }
    }

    /// Link to a stored asset, leaving absolute URLs untouched.
    pub fn asset(&self, uri: &str) -> String {
        if uri.contains("://") {
            uri.to_string()
        } else {
            self.href(uri)
        }
    }

    pub fn is_current(&self, target: &str) -> bool {
        self.path == target
    }
}

/// Renders a full HTML document. The page component supplies `head` and `body`.
pub fn render<P: Clone + 'static>(page: fn(P) -> Element, props: P) -> Html<String> {
    Html(format!(
        "<!DOCTYPE html><html lang=\"ru\">{}</html>",
        render_to_string(page, props)
    ))
}

/// Renders an HTML fragment to be inserted into an existing page.
pub fn render_fragment<P: Clone + 'static>(fragment: fn(P) -> Element, props: P) -> Html<String> {
    Html(render_to_string(fragment, props))
}

fn render_to_string<P: Clone + 'static>(component: fn(P) -> Element, props: P) -> String {
    let mut dom = VirtualDom::new_with_props(component, props);
    dom.rebuild_in_place();

    dioxus_ssr::render(&dom)
}

/// The "page not found" document, linking from the site root.
pub fn not_found_page() -> Html<String> {
    render(
        route::error::NotFoundPage,
        route::StaticPageProps {
            ctx: PageContext::absolute(),
        },
    )
}
