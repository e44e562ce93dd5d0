use std::path::PathBuf;

use anyhow::{bail, Context, Result};

/// Which `RecordStore` backs the service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreBackend {
    /// JSON document on disk (default).
    File,
    /// Process memory only; everything is lost on restart.
    Memory,
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub data_file: PathBuf,
    pub store_backend: StoreBackend,
    /// Empty when unset; analysis requests then fail, everything else works.
    pub gemini_api_key: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            data_file: PathBuf::from(env_or("DATA_FILE", "data/jobs.json")),
            store_backend: parse_backend(&env_or("JOB_STORE", "file"))?,
            gemini_api_key: env_or("GEMINI_API_KEY", ""),
            port: env_or("PORT", "8080")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: env_or("RUST_LOG", "info"),
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn parse_backend(value: &str) -> Result<StoreBackend> {
    match value.to_ascii_lowercase().as_str() {
        "file" => Ok(StoreBackend::File),
        "memory" => Ok(StoreBackend::Memory),
        other => bail!("JOB_STORE must be 'file' or 'memory', got '{other}'"),
    }
}
