use std::collections::HashMap;

use axum::{
    extract::{Query, State},
    http::Uri,
    response::Html,
};

use crate::{
    server::{
        error::AppError,
        model::thesis::{SearchThesesParam, ALL_WORKTYPES, ANY},
        service::thesis::ThesisService,
        state::AppState,
        util::parse::{parse_opt, parse_or},
    },
    view::{
        self,
        route::{
            theses::{
                BlankFragment, ThesesFragment, ThesesFragmentProps, ThesesPage, ThesesPageProps,
            },
            StaticPageProps,
        },
        PageContext,
    },
};

/// Thesis directory with the filter form; results are loaded by the page script.
pub async fn theses(State(state): State<AppState>, uri: Uri) -> Result<Html<String>, AppError> {
    let options = ThesisService::new(&state.db).get_filter_options().await?;

    Ok(view::render(
        ThesesPage,
        ThesesPageProps {
            ctx: PageContext::for_path(uri.path()),
            options,
        },
    ))
}

/// One page of filtered theses as an HTML fragment.
///
/// Every query parameter is optional; values that are not integers fall back to their
/// defaults instead of rejecting the request.
pub async fn fetch_theses(
    State(state): State<AppState>,
    uri: Uri,
    Query(query): Query<HashMap<String, String>>,
) -> Result<Html<String>, AppError> {
    let value = |name: &str| query.get(name).map(String::as_str);
    let param = SearchThesesParam {
        worktype: parse_or(value("worktype"), ALL_WORKTYPES),
        page: parse_or(value("page"), 1),
        supervisor: parse_or(value("supervisor"), ANY),
        course: parse_or(value("course"), ANY),
        startdate: parse_opt(value("startdate")),
        enddate: parse_opt(value("enddate")),
    };

    let page = ThesisService::new(&state.db).search(param).await?;
    let ctx = PageContext::for_path(uri.path());

    if page.theses.is_empty() {
        return Ok(view::render_fragment(BlankFragment, StaticPageProps { ctx }));
    }

    Ok(view::render_fragment(
        ThesesFragment,
        ThesesFragmentProps { ctx, page },
    ))
}
