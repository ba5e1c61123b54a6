// src/config.rs
use crate::domain::window::MAX_WINDOW_DAYS;
use std::env;
use std::net::SocketAddr;
use thiserror::Error;

pub const DEFAULT_FEEDBACK_LIMIT: usize = 10;
pub const DEFAULT_WINDOW_DAYS: i64 = 30;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{0} environment variable is required")]
    Missing(&'static str),

    #[error("{var} has an invalid value: {value:?}")]
    Invalid { var: &'static str, value: String },
}

/// Everything the process needs from its environment.
#[derive(Debug, Clone)]
pub struct Config {
    pub sheet_id: String,
    pub key_file: String,
    pub host: String,
    pub port: u16,
    pub max_workers: usize,
    pub feedback_limit: usize,
    pub window_days: i64,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from any key lookup. `from_env` passes `std::env`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |var: &'static str| {
            lookup(var)
                .filter(|v| !v.trim().is_empty())
                .ok_or(ConfigError::Missing(var))
        };

        let window_days = parse_or(&lookup, "WINDOW_DAYS", DEFAULT_WINDOW_DAYS)?;
        if !(0..=MAX_WINDOW_DAYS).contains(&window_days) {
            return Err(ConfigError::Invalid {
                var: "WINDOW_DAYS",
                value: window_days.to_string(),
            });
        }

        Ok(Self {
            sheet_id: required("SHEET_ID")?,
            key_file: required("GOOGLE_SA_KEY_FILE")?,
            host: lookup("HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port: parse_or(&lookup, "PORT", 3000)?,
            max_workers: parse_or(&lookup, "MAX_WORKERS", 8)?,
            feedback_limit: parse_or(&lookup, "FEEDBACK_LIMIT", DEFAULT_FEEDBACK_LIMIT)?,
            window_days,
        })
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        let raw = format!("{}:{}", self.host, self.port);
        raw.parse().map_err(|_| ConfigError::Invalid {
            var: "HOST",
            value: raw,
        })
    }
}

fn parse_or<F, T>(lookup: &F, var: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(var) {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { var, value }),
    }
}
