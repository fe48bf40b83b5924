use std::path::PathBuf;

use anyhow::{bail, Context, Result};

use crate::analysis::scoring::DEFAULT_TOP_K;
use crate::analysis::store::DEFAULT_MAX_HISTORY;

const DEFAULT_PORT: u16 = 5000;
const DEFAULT_MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;

/// Application configuration loaded from environment variables.
/// Every setting has a default; startup fails only on malformed values.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// JSON job catalog. `None` uses the catalog embedded in the binary.
    pub catalog_path: Option<PathBuf>,
    /// Number of best matches that scope missing skills and strengths.
    pub top_k: usize,
    pub max_upload_bytes: usize,
    /// Uploads kept in memory before the oldest are evicted.
    pub max_history: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let port = match lookup("PORT") {
            Some(raw) => raw
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            None => DEFAULT_PORT,
        };

        let top_k = match lookup("TOP_K") {
            Some(raw) => raw
                .parse::<usize>()
                .context("TOP_K must be a non-negative integer")?,
            None => DEFAULT_TOP_K,
        };
        if top_k == 0 {
            bail!("TOP_K must be at least 1");
        }

        let max_upload_bytes = match lookup("MAX_UPLOAD_BYTES") {
            Some(raw) => raw
                .parse::<usize>()
                .context("MAX_UPLOAD_BYTES must be a byte count")?,
            None => DEFAULT_MAX_UPLOAD_BYTES,
        };

        let max_history = match lookup("MAX_HISTORY") {
            Some(raw) => raw
                .parse::<usize>()
                .context("MAX_HISTORY must be a non-negative integer")?,
            None => DEFAULT_MAX_HISTORY,
        };
        if max_history == 0 {
            bail!("MAX_HISTORY must be at least 1");
        }

        Ok(Config {
            port,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            catalog_path: lookup("JOB_CATALOG_PATH")
                .filter(|p| !p.trim().is_empty())
                .map(PathBuf::from),
            top_k,
            max_upload_bytes,
            max_history,
        })
    }
}
