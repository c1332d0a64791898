use anyhow::{Context, Result};

use crate::errors::AppError;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Upper bound for any single text field in a request body.
    pub max_text_bytes: usize,
    pub cors_permissive: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: 8080,
            rust_log: "info".to_string(),
            max_text_bytes: 200_000,
            cors_permissive: true,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        let defaults = Config::default();

        Ok(Config {
            port: parse_env("PORT", defaults.port)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or(defaults.rust_log),
            max_text_bytes: parse_env("MAX_TEXT_BYTES", defaults.max_text_bytes)?,
            cors_permissive: parse_env("CORS_PERMISSIVE", defaults.cors_permissive)?,
        })
    }

    /// Rejects request text that exceeds `max_text_bytes`.
    pub fn check_text_len(&self, field: &'static str, text: &str) -> Result<(), AppError> {
        if text.len() > self.max_text_bytes {
            return Err(AppError::PayloadTooLarge {
                field,
                limit: self.max_text_bytes,
            });
        }
        Ok(())
    }
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("{key} has an invalid value: '{raw}'")),
        Err(_) => Ok(default),
    }
}
