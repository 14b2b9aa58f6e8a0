use axum::http::StatusCode;
use test_utils::factory::{
    courses::CourseFactory, staff::StaffFactory, thesis::ThesisFactory, users::UserFactory,
    worktype::WorktypeFactory,
};

use crate::server::controller::test::{body_text, TestApp};

/// Creates a supervisor "Петров П.П." with one bachelor thesis per year from 2018 to 2021.
async fn seed(app: &TestApp) {
    let db = &app.db;
    let user = UserFactory::new(db)
        .first_name("Пётр")
        .middle_name(Some("Петрович"))
        .last_name("Петров")
        .build()
        .await
        .unwrap();
    let staff = StaffFactory::new(db, user.id).build().await.unwrap();
    WorktypeFactory::new(db).id(1).kind("Все").build().await.unwrap();
    let bachelor = WorktypeFactory::new(db)
        .id(3)
        .kind("Бакалаврская ВКР")
        .build()
        .await
        .unwrap();
    let course = CourseFactory::new(db)
        .name("Программная инженерия")
        .build()
        .await
        .unwrap();

    for year in 2018..=2021 {
        ThesisFactory::new(db, bachelor.id, course.id, staff.id)
            .name_ru(format!("Работа {}", year))
            .publish_year(year)
            .build()
            .await
            .unwrap();
    }
}

/// Tests that the search page offers the supervisors and years present in theses.
#[tokio::test]
async fn search_page_lists_filter_options() {
    let app = TestApp::new().await;
    seed(&app).await;

    let html = body_text(app.get("/theses.html").await).await;

    assert!(html.contains("Петров П.П."));
    assert!(html.contains("Программная инженерия"));
    assert!(html.contains(">2018<"));
    assert!(html.contains("js/theses.js"));
}

/// Tests that the fragment applies the year range from the query.
#[tokio::test]
async fn fetch_filters_by_year_range() {
    let app = TestApp::new().await;
    seed(&app).await;

    let response = app
        .get("/fetch_theses?worktype=3&startdate=2020&enddate=2020")
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("Работа 2020"));
    assert!(!html.contains("Работа 2019"));
    assert!(!html.contains("Работа 2021"));
}

/// Tests that unparsable parameters fall back to their defaults.
#[tokio::test]
async fn fetch_tolerates_invalid_parameters() {
    let app = TestApp::new().await;
    seed(&app).await;

    let response = app
        .get("/fetch_theses?worktype=abc&page=-4&supervisor=x&course=&startdate=y")
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    for year in 2018..=2021 {
        assert!(html.contains(&format!("Работа {}", year)));
    }
}

/// Tests that a search without results renders the blank fragment.
#[tokio::test]
async fn fetch_renders_blank_fragment_without_results() {
    let app = TestApp::new().await;
    seed(&app).await;

    let html = body_text(app.get("/fetch_theses?page=9").await).await;

    assert!(html.contains("работ не найдено"));
}
