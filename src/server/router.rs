use axum::{
    extract::DefaultBodyLimit,
    handler::HandlerWithoutStateExt,
    response::Redirect,
    routing::{get, post},
    Router,
};
use tower_http::{services::ServeDir, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    server::{
        controller::{
            admin, curriculum, moderation,
            page::{self, static_page},
            sitemap, staff, summer_school, thesis,
            upload::{self, UPLOAD_TAG},
        },
        service::admin::{
            AdminResource, CoursesResource, CurriculumResource, StaffResource,
            SummerSchoolResource, ThesisResource, UsersResource, WorktypeResource,
        },
        state::AppState,
    },
    view::route::{
        bachelor::ApplicationPage,
        error::{NoOfferPage, NotFoundPage},
        home::{ContactsPage, FaqPage, IndexPage},
        master::{InformationSystemsAdministrationPage, SoftwareEngineeringPage},
        students::{ScholarshipsPage, StudentsPage},
    },
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Department website API",
        description = "Thesis upload endpoint used by the department's submission tooling"
    ),
    tags(
        (name = UPLOAD_TAG, description = "Thesis upload")
    )
)]
struct ApiDoc;

/// Builds the complete application router.
///
/// Paths not matched by a route are looked up in the static directory, falling back to
/// the 404 page.
pub fn router(state: AppState) -> Router {
    let (api_router, api) = OpenApiRouter::<AppState>::with_openapi(ApiDoc::openapi())
        .routes(routes!(upload::post_theses))
        .split_for_parts();

    let static_files =
        ServeDir::new(&state.config.static_dir).not_found_service(page::not_found.into_service());
    let upload_limit = state.config.upload_limit_bytes;

    Router::new()
        .merge(page_routes())
        .merge(thesis_routes())
        .merge(admin_routes())
        .merge(api_router)
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
        .fallback_service(static_files)
        .layer(DefaultBodyLimit::max(upload_limit))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn page_routes() -> Router<AppState> {
    Router::new()
        .route("/", static_page(IndexPage))
        .route("/index.html", get(page::index_alias))
        .route("/contacts.html", static_page(ContactsPage))
        .route("/students/index.html", static_page(StudentsPage))
        .route("/students/scholarships.html", static_page(ScholarshipsPage))
        .route("/bachelor/application.html", static_page(ApplicationPage))
        .route("/bachelor/admission.html", get(staff::admission))
        .route(
            "/bachelor/programming-technology.html",
            get(curriculum::programming_technology),
        )
        .route(
            "/bachelor/software-engineering.html",
            get(curriculum::software_engineering),
        )
        .route(
            "/master/information-systems-administration.html",
            static_page(InformationSystemsAdministrationPage),
        )
        .route(
            "/master/software-engineering.html",
            static_page(SoftwareEngineeringPage),
        )
        .route("/department/staff.html", get(staff::staff))
        .route("/frequently-asked-questions.html", static_page(FaqPage))
        .route("/summer_school_2021.html", get(summer_school::summer_school))
        .route("/nooffer.html", static_page(NoOfferPage))
        .route("/404.html", static_page(NotFoundPage))
        .route("/sitemap.xml", get(sitemap::sitemap))
        .route("/Sitemap.xml", get(sitemap::sitemap))
}

fn thesis_routes() -> Router<AppState> {
    Router::new()
        .route("/theses.html", get(thesis::theses))
        .route("/fetch_theses", get(thesis::fetch_theses))
        .route("/theses_tmp.html", get(moderation::theses_tmp))
        .route("/theses_delete_tmp", get(moderation::theses_delete_tmp))
        .route("/theses_add_tmp", get(moderation::theses_add_tmp))
        // Keeps staged uploads out of the public static directory.
        .route("/tmp/{*path}", get(moderation::staged_file))
}

fn admin_routes() -> Router<AppState> {
    let router = Router::new()
        .route("/admin", get(|| async { Redirect::permanent("/admin/") }))
        .route("/admin/", get(admin::index));

    [
        resource_routes::<UsersResource>,
        resource_routes::<StaffResource>,
        resource_routes::<ThesisResource>,
        resource_routes::<SummerSchoolResource>,
        resource_routes::<CoursesResource>,
        resource_routes::<CurriculumResource>,
        resource_routes::<WorktypeResource>,
    ]
    .into_iter()
    .fold(router, |router, routes| routes(router))
}

fn resource_routes<R: AdminResource>(router: Router<AppState>) -> Router<AppState> {
    let base = format!("/admin/{}", R::SLUG);

    router
        .route(&format!("{base}/"), get(admin::list::<R>))
        .route(
            &format!("{base}/new"),
            get(admin::new_form::<R>).post(admin::create::<R>),
        )
        .route(
            &format!("{base}/edit/{{id}}"),
            get(admin::edit_form::<R>).post(admin::update::<R>),
        )
        .route(&format!("{base}/delete/{{id}}"), post(admin::delete::<R>))
}
