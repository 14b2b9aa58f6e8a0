use axum::http::{header, HeaderMap, HeaderValue};
use base64::{engine::general_purpose::STANDARD, Engine};

use crate::server::{config::Config, error::auth::AuthError, middleware::auth::BasicAuthGuard};

fn basic(credentials: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    let value = format!("Basic {}", STANDARD.encode(credentials));
    headers.insert(header::AUTHORIZATION, HeaderValue::from_str(&value).unwrap());
    headers
}

/// Tests that the configured staff credentials are accepted.
///
/// Expected: Ok(())
#[test]
fn accepts_configured_credentials() {
    let config = Config::for_test("static");
    let headers = basic("se_staff:test-password");

    let result = BasicAuthGuard::new(&config, &headers).require();

    assert!(result.is_ok());
}

/// Tests that a wrong password is rejected with the supplied username.
///
/// Expected: Err(AuthError::InvalidCredentials("se_staff"))
#[test]
fn rejects_wrong_password() {
    let config = Config::for_test("static");
    let headers = basic("se_staff:guess");

    let result = BasicAuthGuard::new(&config, &headers).require();

    assert!(matches!(result, Err(AuthError::InvalidCredentials(ref user)) if user == "se_staff"));
}

/// Tests requests without an authorization header.
///
/// Expected: Err(AuthError::MissingCredentials)
#[test]
fn rejects_missing_header() {
    let config = Config::for_test("static");
    let headers = HeaderMap::new();

    let result = BasicAuthGuard::new(&config, &headers).require();

    assert!(matches!(result, Err(AuthError::MissingCredentials)));
}

/// Tests that other schemes and malformed payloads count as missing credentials.
///
/// Expected: Err(AuthError::MissingCredentials) for each header
#[test]
fn rejects_malformed_headers() {
    let config = Config::for_test("static");

    for value in ["Bearer abc", "Basic not-base64!", "Basic"] {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_static(value));

        let result = BasicAuthGuard::new(&config, &headers).require();

        assert!(
            matches!(result, Err(AuthError::MissingCredentials)),
            "accepted {value:?}"
        );
    }
}

/// Tests that passwords may contain colons.
///
/// Expected: Ok(()) when the configured password contains a colon
#[test]
fn splits_on_first_colon_only() {
    let mut config = Config::for_test("static");
    config.admin_password = "a:b".to_string();
    let headers = basic("se_staff:a:b");

    assert!(BasicAuthGuard::new(&config, &headers).require().is_ok());
}
