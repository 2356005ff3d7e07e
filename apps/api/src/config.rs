use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Context, Result};

use crate::catalog::loader::CatalogSource;

/// Application configuration loaded from environment variables.
/// Every variable is optional; unset values fall back to `Config::default()`.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// JSON catalog on disk. `None` serves the catalog compiled into the binary.
    pub catalog_path: Option<PathBuf>,
    /// Periodic reload interval. `None` disables the background reload task.
    pub catalog_reload_secs: Option<u64>,
    pub scoring_policy_path: Option<PathBuf>,
    pub min_score: Option<f64>,
    /// 0 means unlimited.
    pub max_results: Option<usize>,
    pub request_timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 5001,
            rust_log: "info".to_string(),
            catalog_path: None,
            catalog_reload_secs: None,
            scoring_policy_path: None,
            min_score: None,
            max_results: None,
            request_timeout_secs: 10,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = Config::default();
        let catalog_reload_secs = optional_env::<u64>("CATALOG_RELOAD_SECS")?;
        if catalog_reload_secs == Some(0) {
            anyhow::bail!("CATALOG_RELOAD_SECS must be greater than zero");
        }

        Ok(Config {
            port: optional_env("PORT")?.unwrap_or(defaults.port),
            rust_log: std::env::var("RUST_LOG").unwrap_or(defaults.rust_log),
            catalog_path: optional_env("CATALOG_PATH")?,
            catalog_reload_secs,
            scoring_policy_path: optional_env("SCORING_POLICY_PATH")?,
            min_score: optional_env("MIN_SCORE")?,
            max_results: optional_env("MAX_RESULTS")?,
            request_timeout_secs: optional_env("REQUEST_TIMEOUT_SECS")?
                .unwrap_or(defaults.request_timeout_secs),
        })
    }

    pub fn catalog_source(&self) -> CatalogSource {
        match &self.catalog_path {
            Some(path) => CatalogSource::File(path.clone()),
            None => CatalogSource::Embedded,
        }
    }
}

/// Reads and parses `key`. Unset or blank is `None`; an unparsable value is an error.
fn optional_env<T>(key: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .with_context(|| format!("Environment variable '{key}' has an invalid value: {raw}")),
        _ => Ok(None),
    }
}
