//! Configuration module for the resources backend.
//!
//! All configuration is loaded from environment variables with sensible defaults.

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

use crate::errors::AppError;
use crate::models::ExternalLinks;

/// Output format for log lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

impl LogFormat {
    fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" | "pretty" => Some(LogFormat::Text),
            "json" => Some(LogFormat::Json),
            _ => None,
        }
    }
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Address to bind the server to
    pub bind_addr: SocketAddr,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
    /// Log line format
    pub log_format: LogFormat,
    /// Catalog document to load instead of the embedded one
    pub catalog_path: Option<PathBuf>,
    /// Shop and waitlist destinations
    pub links: ExternalLinks,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let bind_addr = env::var("CAIDEN_BIND_ADDR")
            .unwrap_or_else(|_| "127.0.0.1:8080".to_string());
        let bind_addr = bind_addr.parse().map_err(|e| {
            AppError::Config(format!("Invalid CAIDEN_BIND_ADDR '{}': {}", bind_addr, e))
        })?;

        let log_level = env::var("CAIDEN_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let log_format = match env::var("CAIDEN_LOG_FORMAT") {
            Ok(raw) => LogFormat::parse(&raw).ok_or_else(|| {
                AppError::Config(format!(
                    "Invalid CAIDEN_LOG_FORMAT '{}' (expected text or json)",
                    raw
                ))
            })?,
            Err(_) => LogFormat::Text,
        };

        let catalog_path = non_empty_var("CAIDEN_CATALOG_PATH").map(PathBuf::from);

        let links = ExternalLinks {
            preorder_url: link_var("CAIDEN_PREORDER_URL")?,
            waitlist_url: link_var("CAIDEN_WAITLIST_URL")?,
        };

        Ok(Self {
            bind_addr,
            log_level,
            log_format,
            catalog_path,
            links,
        })
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Read an optional outbound link; only absolute http(s) URLs are accepted.
fn link_var(key: &str) -> Result<Option<String>, AppError> {
    match non_empty_var(key) {
        Some(url) if url.starts_with("https://") || url.starts_with("http://") => Ok(Some(url)),
        Some(url) => Err(AppError::Config(format!(
            "{} must be an http(s) URL, got '{}'",
            key, url
        ))),
        None => Ok(None),
    }
}
