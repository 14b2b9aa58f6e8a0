use axum::http::{header, StatusCode};
use sea_orm::EntityTrait;
use test_utils::factory::{self, thesis::ThesisFactory};

use crate::server::{
    controller::test::{body_text, TestApp},
    model::upload::FileKind,
    storage::ThesisStorage,
};

async fn staged_thesis(app: &TestApp) -> entity::thesis::Model {
    let db = &app.db;
    let (staff, worktype, course, _) = factory::helpers::create_thesis_with_dependencies(db)
        .await
        .unwrap();
    ThesisStorage::new(app.dir.path())
        .stage(FileKind::Text, "Staged_text.pdf", b"%PDF")
        .await
        .unwrap();

    ThesisFactory::new(db, worktype.id, course.id, staff.id)
        .name_ru("Ожидает проверки")
        .text_uri(Some("Staged_text.pdf"))
        .temporary(true)
        .build()
        .await
        .unwrap()
}

/// Tests that moderation pages challenge requests without credentials.
#[tokio::test]
async fn requires_basic_auth() {
    let app = TestApp::new().await;

    for path in ["/theses_tmp.html", "/theses_add_tmp", "/theses_delete_tmp"] {
        let response = app.get(path).await;

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED, "{}", path);
        assert_eq!(
            response.headers()[header::WWW_AUTHENTICATE],
            "Basic realm=\"Login Required\""
        );
        assert_eq!(
            body_text(response).await,
            "You could not be authenticated. Please refresh the page."
        );
    }
}

/// Tests that the moderation list links to the staged files.
#[tokio::test]
async fn lists_pending_theses() {
    let app = TestApp::new().await;
    let thesis = staged_thesis(&app).await;

    let html = body_text(app.get_as_staff("/theses_tmp.html").await).await;

    assert!(html.contains("Ожидает проверки"));
    assert!(html.contains("tmp/texts/Staged_text.pdf"));
    assert!(html.contains(&format!("theses_add_tmp?thesis_id={}", thesis.id)));
}

/// Tests that publishing moves the files and redirects back to the list.
#[tokio::test]
async fn publishes_thesis() {
    let app = TestApp::new().await;
    let thesis = staged_thesis(&app).await;

    let response = app
        .get_as_staff(&format!("/theses_add_tmp?thesis_id={}", thesis.id))
        .await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/theses_tmp.html");
    let published = entity::prelude::Thesis::find_by_id(thesis.id)
        .one(&app.db)
        .await
        .unwrap()
        .unwrap();
    assert!(!published.temporary);
    assert!(app.dir.path().join("thesis/texts/Staged_text.pdf").exists());
}

/// Tests that deleting removes the row and its files, and that an unparsable id falls
/// back to the default without failing.
#[tokio::test]
async fn deletes_thesis() {
    let app = TestApp::new().await;
    let thesis = staged_thesis(&app).await;

    let fallback = app.get_as_staff("/theses_delete_tmp?thesis_id=abc").await;
    assert_eq!(fallback.status(), StatusCode::SEE_OTHER);

    let response = app
        .get_as_staff(&format!("/theses_delete_tmp?thesis_id={}", thesis.id))
        .await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert!(entity::prelude::Thesis::find_by_id(thesis.id)
        .one(&app.db)
        .await
        .unwrap()
        .is_none());
    assert!(!app.dir.path().join("tmp/texts/Staged_text.pdf").exists());
}

/// Tests that staged files are only served to moderators and never from the static directory.
#[tokio::test]
async fn staged_files_require_basic_auth() {
    let app = TestApp::new().await;
    staged_thesis(&app).await;

    let anonymous = app.get("/tmp/texts/Staged_text.pdf").await;
    assert_eq!(anonymous.status(), StatusCode::UNAUTHORIZED);

    let moderator = app.get_as_staff("/tmp/texts/Staged_text.pdf").await;
    assert_eq!(moderator.status(), StatusCode::OK);
    assert_eq!(body_text(moderator).await, "%PDF");

    for path in ["/tmp/texts/Missing.pdf", "/tmp/other/Staged_text.pdf", "/tmp/texts"] {
        let response = app.get_as_staff(path).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND, "{}", path);
    }
}
