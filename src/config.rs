use crate::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";

pub struct Config {
    pub database_url: String,
    pub bind_addr: String,

    /// Bootstrap admin credentials, used once when no admin user exists.
    pub admin_email: Option<String>,
    pub admin_password: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            bind_addr: std::env::var("BIND_ADDR")
                .unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string()),
            admin_email: std::env::var("ADMIN_EMAIL").ok(),
            admin_password: std::env::var("ADMIN_PASSWORD").ok(),
        })
    }
}
