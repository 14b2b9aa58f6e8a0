//! Router-level tests driven through `tower::ServiceExt::oneshot`.

mod moderation;
mod thesis;
mod upload;

use axum::{
    body::{to_bytes, Body},
    http::{header, Request, Response},
    Router,
};
use base64::{engine::general_purpose::STANDARD, Engine};
use sea_orm::DatabaseConnection;
use tempfile::TempDir;
use test_utils::{builder::TestBuilder, context::TestContext};
use tower::ServiceExt;

use crate::server::{config::Config, router::router, state::AppState};

/// The full application over an in-memory database and a temporary static directory.
pub(crate) struct TestApp {
    pub router: Router,
    pub db: DatabaseConnection,
    pub dir: TempDir,
    /// Owns the database for the lifetime of the app.
    _test: TestContext,
}

impl TestApp {
    pub async fn new() -> Self {
        let test = TestBuilder::new().with_all_tables().build().await.unwrap();
        let db = test.db.clone().unwrap();
        let dir = tempfile::tempdir().unwrap();
        let state = AppState::new(db.clone(), Config::for_test(dir.path()));
        state.storage.ensure_dirs().await.unwrap();

        Self {
            router: router(state),
            db,
            dir,
            _test: test,
        }
    }

    pub async fn send(&self, request: Request<Body>) -> Response<Body> {
        self.router.clone().oneshot(request).await.unwrap()
    }

    pub async fn get(&self, path: &str) -> Response<Body> {
        self.send(Request::get(path).body(Body::empty()).unwrap())
            .await
    }

    /// GET with the staff credentials of [`Config::for_test`].
    pub async fn get_as_staff(&self, path: &str) -> Response<Body> {
        self.send(
            Request::get(path)
                .header(header::AUTHORIZATION, staff_credentials())
                .body(Body::empty())
                .unwrap(),
        )
        .await
    }

    /// Form POST with the staff credentials of [`Config::for_test`].
    pub async fn post_form_as_staff(&self, path: &str, form: &str) -> Response<Body> {
        self.send(
            Request::post(path)
                .header(header::AUTHORIZATION, staff_credentials())
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(form.to_string()))
                .unwrap(),
        )
        .await
    }
}

pub(crate) fn staff_credentials() -> String {
    format!("Basic {}", STANDARD.encode("se_staff:test-password"))
}

pub(crate) async fn body_text(response: Response<Body>) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}
