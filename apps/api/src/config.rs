use std::path::PathBuf;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Loaded once at startup and injected into the services that need it —
/// no component reads the environment ad hoc.
#[derive(Debug, Clone)]
pub struct Config {
    pub mail_host: String,
    pub mail_port: u16,
    pub mail_user: String,
    pub mail_password: String,
    pub mail_from: String,
    /// Recipient of the internal "someone requested the resume" notification.
    /// Fixed per deployment, never per request.
    pub owner_email: String,
    /// Override for the headless browser binary. When unset, the rendering
    /// strategy falls back to the platform default resolution.
    pub chrome_executable: Option<PathBuf>,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let mail_user = require_env("EMAIL_USER")?;

        Ok(Config {
            mail_host: require_env("EMAIL_HOST")?,
            mail_port: std::env::var("EMAIL_PORT")
                .unwrap_or_else(|_| "587".to_string())
                .parse::<u16>()
                .context("EMAIL_PORT must be a valid port number")?,
            mail_password: require_env("EMAIL_PASS")?,
            mail_from: require_env("EMAIL_FROM")?,
            owner_email: std::env::var("OWNER_EMAIL").unwrap_or_else(|_| mail_user.clone()),
            mail_user,
            chrome_executable: std::env::var("CHROME_EXECUTABLE_PATH")
                .ok()
                .map(PathBuf::from),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}
