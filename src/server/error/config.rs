use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable is set but cannot be parsed.
    ///
    /// Check the `.env.example` file for the expected format of each variable.
    #[error("Invalid value '{value}' for environment variable {name}: {reason}")]
    InvalidEnvVar {
        name: String,
        value: String,
        reason: String,
    },
}
