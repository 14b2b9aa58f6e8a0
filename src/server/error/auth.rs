use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use dioxus_logger::tracing;
use thiserror::Error;

/// Realm announced in the basic authentication challenge.
pub const BASIC_AUTH_REALM: &str = "Basic realm=\"Login Required\"";

#[derive(Error, Debug)]
pub enum AuthError {
    /// The request carried no usable `Authorization: Basic` header.
    #[error("Request is missing basic authentication credentials")]
    MissingCredentials,

    /// The supplied username or password does not match the configured staff credentials.
    #[error("Invalid basic authentication credentials for user '{0}'")]
    InvalidCredentials(String),
}

/// Converts authentication errors into a basic authentication challenge.
///
/// Every variant results in a 401 Unauthorized response carrying the
/// `WWW-Authenticate` header so browsers prompt for credentials again.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        (
            StatusCode::UNAUTHORIZED,
            [(header::WWW_AUTHENTICATE, BASIC_AUTH_REALM)],
            "You could not be authenticated. Please refresh the page.",
        )
            .into_response()
    }
}
