use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is not set. Check `.env.example` for the
    /// variables the application expects.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),
}
