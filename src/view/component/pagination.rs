use dioxus::prelude::*;

use crate::server::model::pagination::Pagination;

/// Page links with gaps, as produced by [`Pagination::iter_pages`].
///
/// `href` maps a page number to its link.
#[component]
pub fn PageLinks(pagination: Pagination, href: Callback<u64, String>) -> Element {
    if pagination.pages() <= 1 {
        return rsx!();
    }

    rsx!(nav {
        class: "pagination",
        ul {
            if let Some(prev) = pagination.prev_num() {
                li {
                    a { href: href.call(prev), "«" }
                }
            }
            for (index, page) in pagination.iter_pages().into_iter().enumerate() {
                if let Some(page) = page {
                    li {
                        key: "{index}",
                        class: if page == pagination.page { "active" } else { "" },
                        a { href: href.call(page), "{page}" }
                    }
                } else {
                    li { key: "{index}", class: "gap", "…" }
                }
            }
            if let Some(next) = pagination.next_num() {
                li {
                    a { href: href.call(next), "»" }
                }
            }
        }
    })
}
