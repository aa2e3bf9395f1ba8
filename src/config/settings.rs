//! Runtime settings read from `STR_GAMES_*` environment variables, each with a default.

use crate::error::ConfigError;
use axum::http::HeaderValue;
use std::fmt::Display;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

pub const DEFAULT_DATABASE_PATH: &str = "strGames.db";
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_CORS_ORIGIN: &str = "http://localhost:8081";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 4;
pub const DEFAULT_ACQUIRE_TIMEOUT_SECS: u64 = 5;
pub const DEFAULT_BODY_LIMIT: usize = 64 * 1024;

/// What update and delete report when the id matches no row.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MissingRowPolicy {
    /// Succeed anyway (200 for update, 204 for delete).
    #[default]
    Ignore,
    /// Respond 404.
    NotFound,
}

impl FromStr for MissingRowPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ignore" => Ok(MissingRowPolicy::Ignore),
            "not_found" | "not-found" | "404" => Ok(MissingRowPolicy::NotFound),
            other => Err(format!("expected 'ignore' or 'not_found', got '{other}'")),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Settings {
    /// SQLite file; created on first start.
    pub database_path: PathBuf,
    pub host: String,
    pub port: u16,
    pub cors_origin: HeaderValue,
    pub max_connections: u32,
    /// Pool acquire timeout, also used as the SQLite busy timeout.
    pub acquire_timeout: Duration,
    pub missing_row: MissingRowPolicy,
    /// Max request body in bytes.
    pub body_limit: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            database_path: PathBuf::from(DEFAULT_DATABASE_PATH),
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            cors_origin: HeaderValue::from_static(DEFAULT_CORS_ORIGIN),
            max_connections: DEFAULT_MAX_CONNECTIONS,
            acquire_timeout: Duration::from_secs(DEFAULT_ACQUIRE_TIMEOUT_SECS),
            missing_row: MissingRowPolicy::Ignore,
            body_limit: DEFAULT_BODY_LIMIT,
        }
    }
}

impl Settings {
    /// Read settings from the process environment. Call `dotenvy::dotenv()` first to pick up `.env`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read settings through `lookup`; unset variables fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Settings::default();

        let database_path = lookup("STR_GAMES_DATABASE_PATH")
            .map(PathBuf::from)
            .unwrap_or(defaults.database_path);
        let host = lookup("STR_GAMES_HOST").unwrap_or(defaults.host);
        let port = parse_var(&lookup, "STR_GAMES_PORT", defaults.port)?;

        let cors_origin = match lookup("STR_GAMES_CORS_ORIGIN") {
            Some(raw) => HeaderValue::from_str(raw.trim()).map_err(|e| ConfigError::InvalidValue {
                var: "STR_GAMES_CORS_ORIGIN",
                value: raw.clone(),
                reason: e.to_string(),
            })?,
            None => defaults.cors_origin,
        };

        let max_connections = parse_var(&lookup, "STR_GAMES_MAX_CONNECTIONS", defaults.max_connections)?;
        if max_connections == 0 {
            return Err(ConfigError::InvalidValue {
                var: "STR_GAMES_MAX_CONNECTIONS",
                value: "0".into(),
                reason: "must be at least 1".into(),
            });
        }

        let acquire_timeout = Duration::from_secs(parse_var(
            &lookup,
            "STR_GAMES_ACQUIRE_TIMEOUT_SECS",
            DEFAULT_ACQUIRE_TIMEOUT_SECS,
        )?);
        let missing_row = parse_var(&lookup, "STR_GAMES_MISSING_ROW", defaults.missing_row)?;
        let body_limit = parse_var(&lookup, "STR_GAMES_BODY_LIMIT", defaults.body_limit)?;

        Ok(Settings {
            database_path,
            host,
            port,
            cors_origin,
            max_connections,
            acquire_timeout,
            missing_row,
            body_limit,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_var<F, T>(lookup: &F, var: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: Display,
{
    match lookup(var) {
        Some(raw) => raw.trim().parse().map_err(|e: T::Err| ConfigError::InvalidValue {
            var,
            value: raw.clone(),
            reason: e.to_string(),
        }),
        None => Ok(default),
    }
}
