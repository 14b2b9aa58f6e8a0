use axum::http::{header, HeaderMap};
use base64::{engine::general_purpose::STANDARD, Engine};

use crate::server::{config::Config, error::auth::AuthError};

/// HTTP basic authentication check for the moderation and admin pages.
///
/// Every staff member shares the single configured username and password.
pub struct BasicAuthGuard<'a> {
    config: &'a Config,
    headers: &'a HeaderMap,
}

impl<'a> BasicAuthGuard<'a> {
    pub fn new(config: &'a Config, headers: &'a HeaderMap) -> Self {
        Self { config, headers }
    }

    /// Requires the request to carry the configured staff credentials.
    ///
    /// # Returns
    /// - `Ok(())` - Credentials match
    /// - `Err(AuthError::MissingCredentials)` - No decodable `Authorization: Basic` header
    /// - `Err(AuthError::InvalidCredentials)` - Wrong username or password
    pub fn require(&self) -> Result<(), AuthError> {
        let (username, password) = self.credentials().ok_or(AuthError::MissingCredentials)?;

        if username != self.config.admin_username || password != self.config.admin_password {
            return Err(AuthError::InvalidCredentials(username));
        }

        Ok(())
    }

    fn credentials(&self) -> Option<(String, String)> {
        let value = self.headers.get(header::AUTHORIZATION)?.to_str().ok()?;
        let (scheme, encoded) = value.trim().split_once(' ')?;
        if !scheme.eq_ignore_ascii_case("basic") {
            return None;
        }

        let decoded = STANDARD.decode(encoded.trim()).ok()?;
        let decoded = String::from_utf8(decoded).ok()?;
        let (username, password) = decoded.split_once(':')?;

        Some((username.to_string(), password.to_string()))
    }
}
