use axum::{
    body::Body,
    http::{header, Request},
};
use sea_orm::EntityTrait;
use serde_json::json;
use test_utils::factory::{
    courses::CourseFactory, staff::StaffFactory, users::UserFactory, worktype::WorktypeFactory,
};

use crate::{
    model::upload::UploadResponseDto,
    server::controller::test::{body_text, TestApp},
};

const BOUNDARY: &str = "thesis-upload-boundary";

/// A multipart part: field name, optional file name, content.
type Part<'a> = (&'a str, Option<&'a str>, &'a [u8]);

fn multipart_request(parts: &[Part<'_>]) -> Request<Body> {
    let mut body = Vec::new();
    for (name, file_name, content) in parts {
        body.extend_from_slice(format!("--{}\r\n", BOUNDARY).as_bytes());
        let disposition = match file_name {
            Some(file_name) => format!(
                "Content-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\n",
                name, file_name
            ),
            None => format!("Content-Disposition: form-data; name=\"{}\"\r\n", name),
        };
        body.extend_from_slice(disposition.as_bytes());
        body.extend_from_slice(b"Content-Type: application/octet-stream\r\n\r\n");
        body.extend_from_slice(content);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{}--\r\n", BOUNDARY).as_bytes());

    Request::post("/post_theses")
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={}", BOUNDARY),
        )
        .body(Body::from(body))
        .unwrap()
}

async fn upload_response(app: &TestApp, parts: &[Part<'_>]) -> UploadResponseDto {
    let response = app.send(multipart_request(parts)).await;
    serde_json::from_str(&body_text(response).await).unwrap()
}

async fn seed_lookups(app: &TestApp) {
    let db = &app.db;
    let user = UserFactory::new(db)
        .last_name("Петров")
        .build()
        .await
        .unwrap();
    StaffFactory::new(db, user.id).build().await.unwrap();
    WorktypeFactory::new(db).id(3).build().await.unwrap();
    CourseFactory::new(db).id(1).build().await.unwrap();
}

fn thesis_info(secret_key: &str) -> Vec<u8> {
    json!({
        "name_ru": "Верификация компиляторов",
        "secret_key": secret_key,
        "type_id": 3,
        "course_id": 1,
        "author": "Иванов Иван",
        "supervisor": "Петров",
        "publish_year": 2021,
    })
    .to_string()
    .into_bytes()
}

/// Tests that a request without the thesis text is rejected first.
#[tokio::test]
async fn rejects_missing_text() {
    let app = TestApp::new().await;

    let response = upload_response(&app, &[("thesis_info", Some("info.json"), b"{}")]).await;

    assert_eq!(response, UploadResponseDto::error("No thesis text found."));
}

/// Tests that an empty file input counts as missing.
#[tokio::test]
async fn treats_empty_file_part_as_missing() {
    let app = TestApp::new().await;

    let response = upload_response(&app, &[("thesis_text", Some(""), b"")]).await;

    assert_eq!(response, UploadResponseDto::error("No thesis text found."));
}

/// Tests that a request which is not multipart still gets the JSON contract.
#[tokio::test]
async fn rejects_non_multipart_request_with_json() {
    let app = TestApp::new().await;

    let response = app
        .send(
            Request::post("/post_theses")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from("{}"))
                .unwrap(),
        )
        .await;
    let response: UploadResponseDto = serde_json::from_str(&body_text(response).await).unwrap();

    assert_eq!(response.status, 500);
}

/// Tests that a wrong secret key is reported with the key.
#[tokio::test]
async fn rejects_wrong_secret() {
    let app = TestApp::new().await;
    seed_lookups(&app).await;
    let info = thesis_info("guess");

    let response = upload_response(
        &app,
        &[
            ("thesis_text", Some("thesis.pdf"), b"%PDF"),
            ("thesis_info", Some("info.json"), &info),
        ],
    )
    .await;

    assert_eq!(response, UploadResponseDto::error("Invalid secret key: guess"));
}

/// Tests that an accepted upload stores the files in staging and records a temporary
/// thesis, and that uploading it again is refused.
#[tokio::test]
async fn stores_temporary_thesis() {
    let app = TestApp::new().await;
    seed_lookups(&app).await;
    let info = thesis_info("test-secret");
    let parts: [Part<'_>; 3] = [
        ("thesis_text", Some("thesis.pdf"), b"%PDF"),
        ("presentation", Some("slides.pptx"), b"slides"),
        ("thesis_info", Some("info.json"), &info),
    ];

    let response = upload_response(&app, &parts).await;
    assert_eq!(response, UploadResponseDto::success());

    let theses = entity::prelude::Thesis::find().all(&app.db).await.unwrap();
    assert_eq!(theses.len(), 1);
    let thesis = &theses[0];
    assert!(thesis.temporary);
    assert_eq!(thesis.author, "Иванов Иван");
    let text_uri = thesis.text_uri.clone().unwrap();
    assert!(text_uri.ends_with("_text.pdf"));
    assert!(app.dir.path().join("tmp/texts").join(&text_uri).exists());
    let slides_uri = thesis.presentation_uri.clone().unwrap();
    assert!(app.dir.path().join("tmp/slides").join(slides_uri).exists());

    let again = upload_response(&app, &parts).await;
    assert_eq!(
        again,
        UploadResponseDto::error(format!("Work already exists: {}", text_uri))
    );
}
