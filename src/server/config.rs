use std::{net::SocketAddr, path::PathBuf};

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_DATABASE_URL: &str = "sqlite://se.db?mode=rwc";
const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1:5000";
const DEFAULT_STATIC_DIR: &str = "./static";
const DEFAULT_FREEZER_DESTINATION: &str = "../docs";
const DEFAULT_SITE_URL: &str = "https://se.math.spbu.ru";
const DEFAULT_ADMIN_USERNAME: &str = "se_staff";
const DEFAULT_UPLOAD_LIMIT_MB: usize = 100;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub bind_address: SocketAddr,

    /// Directory served as the site root and holding uploaded thesis files.
    pub static_dir: PathBuf,
    /// Output directory of the static site build.
    pub freezer_destination: PathBuf,
    /// Absolute site origin used in the sitemap.
    pub site_url: String,

    /// Shared secret upload clients put into `thesis_info.secret_key`.
    pub thesis_secret_key: String,
    pub admin_username: String,
    pub admin_password: String,

    /// Reviewer assigned to freshly uploaded theses.
    pub default_reviewer_id: Option<i32>,
    pub upload_limit_bytes: usize,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let thesis_secret_key =
            optional_var("THESIS_SECRET_KEY").unwrap_or_else(generate_secret_key);
        let admin_password =
            optional_var("ADMIN_PASSWORD").unwrap_or_else(|| thesis_secret_key.clone());

        let bind_address = optional_var("BIND_ADDRESS")
            .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string());
        let bind_address = bind_address.parse::<SocketAddr>().map_err(|e| {
            ConfigError::InvalidEnvVar {
                name: "BIND_ADDRESS".to_string(),
                value: bind_address.clone(),
                reason: e.to_string(),
            }
        })?;

        let default_reviewer_id = parse_optional_var::<i32>("DEFAULT_REVIEWER_ID")?;
        let upload_limit_mb =
            parse_optional_var::<usize>("UPLOAD_LIMIT_MB")?.unwrap_or(DEFAULT_UPLOAD_LIMIT_MB);

        Ok(Self {
            database_url: optional_var("DATABASE_URL")
                .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
            bind_address,
            static_dir: PathBuf::from(
                optional_var("STATIC_DIR").unwrap_or_else(|| DEFAULT_STATIC_DIR.to_string()),
            ),
            freezer_destination: PathBuf::from(
                optional_var("FREEZER_DESTINATION")
                    .unwrap_or_else(|| DEFAULT_FREEZER_DESTINATION.to_string()),
            ),
            site_url: optional_var("SITE_URL")
                .unwrap_or_else(|| DEFAULT_SITE_URL.to_string())
                .trim_end_matches('/')
                .to_string(),
            thesis_secret_key,
            admin_username: optional_var("ADMIN_USERNAME")
                .unwrap_or_else(|| DEFAULT_ADMIN_USERNAME.to_string()),
            admin_password,
            default_reviewer_id,
            upload_limit_bytes: upload_limit_mb * 1024 * 1024,
        })
    }
}

/// Reads an environment variable, treating an empty value as unset.
fn optional_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.is_empty())
}

fn parse_optional_var<T>(name: &str) -> Result<Option<T>, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    optional_var(name)
        .map(|value| {
            value
                .parse::<T>()
                .map_err(|e| ConfigError::InvalidEnvVar {
                    name: name.to_string(),
                    value: value.clone(),
                    reason: e.to_string(),
                })
        })
        .transpose()
}

/// Generates a random 32 character hex secret.
fn generate_secret_key() -> String {
    let bytes: [u8; 16] = rand::random();
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}

#[cfg(test)]
impl Config {
    /// Configuration for tests rooted at the given static directory.
    pub fn for_test(static_dir: impl Into<PathBuf>) -> Self {
        Self {
            database_url: "sqlite::memory:".to_string(),
            bind_address: DEFAULT_BIND_ADDRESS.parse().unwrap(),
            static_dir: static_dir.into(),
            freezer_destination: PathBuf::from("docs"),
            site_url: DEFAULT_SITE_URL.to_string(),
            thesis_secret_key: "test-secret".to_string(),
            admin_username: DEFAULT_ADMIN_USERNAME.to_string(),
            admin_password: "test-password".to_string(),
            default_reviewer_id: None,
            upload_limit_bytes: DEFAULT_UPLOAD_LIMIT_MB * 1024 * 1024,
        }
    }
}
