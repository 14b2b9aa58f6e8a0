use axum::{extract::State, http::Uri, response::Html};

use crate::{
    server::{
        error::AppError,
        service::{staff::StaffService, thesis::ThesisService},
        state::AppState,
    },
    view::{
        self,
        route::{
            bachelor::{AdmissionPage, AdmissionPageProps},
            department::{StaffPage, StaffPageProps},
        },
        PageContext,
    },
};

/// Recommended theses shown on the admission page.
const ADMISSION_THESES: u64 = 4;
/// Staff members shown on the admission page.
const ADMISSION_STAFF: u64 = 6;

/// Lists every staff member still working at the department.
pub async fn staff(State(state): State<AppState>, uri: Uri) -> Result<Html<String>, AppError> {
    let staff = StaffService::new(&state.db).get_working(None).await?;

    Ok(view::render(
        StaffPage,
        StaffPageProps {
            ctx: PageContext::for_path(uri.path()),
            staff,
        },
    ))
}

/// Admission page with a random pick of recommended theses and some of the staff.
pub async fn admission(State(state): State<AppState>, uri: Uri) -> Result<Html<String>, AppError> {
    let recommended = ThesisService::new(&state.db)
        .get_recommended(ADMISSION_THESES)
        .await?;
    let staff = StaffService::new(&state.db)
        .get_working(Some(ADMISSION_STAFF))
        .await?;

    Ok(view::render(
        AdmissionPage,
        AdmissionPageProps {
            ctx: PageContext::for_path(uri.path()),
            recommended,
            staff,
        },
    ))
}
