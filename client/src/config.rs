//! Client configuration loaded from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

use std::path::PathBuf;

const DEFAULT_API_URL: &str = "http://localhost:8000/api";
const TOKEN_FILE_NAME: &str = "tokens.json";

/// Configuration for constructing a client against one backend.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    /// Backend base URL including the `/api` prefix.
    pub api_url: String,
    /// Path of the durable token file.
    pub token_file: PathBuf,
}

impl ClientConfig {
    /// Load from `HEALTHIQ_API_URL` and `HEALTHIQ_TOKEN_FILE`, falling back
    /// to the local development backend and the per-user token file.
    #[must_use]
    pub fn from_env() -> Self {
        let api_url =
            std::env::var("HEALTHIQ_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_owned());
        let token_file = std::env::var("HEALTHIQ_TOKEN_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| default_token_file());
        Self { api_url, token_file }
    }
}

/// Default token file: `~/.healthiq/tokens.json`, or a repo-local dot
/// directory when no home directory is available.
#[must_use]
pub fn default_token_file() -> PathBuf {
    token_file_under(std::env::var("HOME").ok().as_deref())
}

fn token_file_under(home: Option<&str>) -> PathBuf {
    let base = match home {
        Some(home) if !home.trim().is_empty() => PathBuf::from(home),
        _ => PathBuf::from("."),
    };
    base.join(".healthiq").join(TOKEN_FILE_NAME)
}
