use axum::{
    extract::State,
    http::Uri,
    response::Html,
};

use crate::{
    server::{error::AppError, service::curriculum::CurriculumService, state::AppState},
    view::{
        self,
        route::bachelor::{CurriculumPage, CurriculumPageProps},
        PageContext,
    },
};

/// Course id of the "Programming technology" bachelor programme.
const PROGRAMMING_TECHNOLOGY_COURSE_ID: i32 = 1;
/// Course id of the "Software engineering" bachelor programme.
const SOFTWARE_ENGINEERING_COURSE_ID: i32 = 2;

/// Curriculum of the "Programming technology" programme.
pub async fn programming_technology(
    State(state): State<AppState>,
    uri: Uri,
) -> Result<Html<String>, AppError> {
    curriculum_page(
        &state,
        &uri,
        PROGRAMMING_TECHNOLOGY_COURSE_ID,
        "Технологии программирования",
    )
    .await
}

/// Curriculum of the "Software engineering" programme.
pub async fn software_engineering(
    State(state): State<AppState>,
    uri: Uri,
) -> Result<Html<String>, AppError> {
    curriculum_page(
        &state,
        &uri,
        SOFTWARE_ENGINEERING_COURSE_ID,
        "Программная инженерия",
    )
    .await
}

async fn curriculum_page(
    state: &AppState,
    uri: &Uri,
    course_id: i32,
    title: &str,
) -> Result<Html<String>, AppError> {
    let years = CurriculumService::new(&state.db)
        .get_bachelor_curriculum(course_id)
        .await?;

    Ok(view::render(
        CurriculumPage,
        CurriculumPageProps {
            ctx: PageContext::for_path(uri.path()),
            title: title.to_string(),
            years,
        },
    ))
}
