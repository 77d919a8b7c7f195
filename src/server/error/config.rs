use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is not set.
    ///
    /// Check `.env.example` for the variables the service expects.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    /// An environment variable is set but cannot be parsed.
    #[error("Invalid value for environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}
