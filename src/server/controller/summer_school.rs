use axum::{extract::State, http::Uri, response::Html};

use crate::{
    server::{
        error::AppError, model::summer_school::SUMMER_SCHOOL_YEAR,
        service::summer_school::SummerSchoolService, state::AppState,
    },
    view::{
        self,
        route::summer_school::{SummerSchoolPage, SummerSchoolPageProps},
        PageContext,
    },
};

pub async fn summer_school(
    State(state): State<AppState>,
    uri: Uri,
) -> Result<Html<String>, AppError> {
    let projects = SummerSchoolService::new(&state.db)
        .get_projects(SUMMER_SCHOOL_YEAR)
        .await?;

    Ok(view::render(
        SummerSchoolPage,
        SummerSchoolPageProps {
            ctx: PageContext::for_path(uri.path()),
            year: SUMMER_SCHOOL_YEAR,
            projects,
        },
    ))
}
