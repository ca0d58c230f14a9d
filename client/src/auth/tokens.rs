//! Token persistence.
//!
//! TRADE-OFFS
//! ==========
//! Store operations never fail: a broken or missing backing file degrades to
//! "no session" on read and a warning on write, since losing a token pair is
//! always recoverable by logging in again.

#[cfg(test)]
#[path = "tokens_test.rs"]
mod tests;

use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use serde::{Deserialize, Serialize};

/// Client-side persistence for the access/refresh token pair.
///
/// Absence is `None`; there are no error conditions.
pub trait TokenStore: Send + Sync {
    fn access_token(&self) -> Option<String>;
    fn refresh_token(&self) -> Option<String>;
    /// Store both tokens, replacing any previous pair.
    fn set_tokens(&self, access: &str, refresh: &str);
    /// Drop both tokens.
    fn clear_tokens(&self);
    /// Whether an access token is currently stored.
    fn has_tokens(&self) -> bool {
        self.access_token().is_some()
    }
}

/// On-disk token file layout. The fixed key names are part of the client's
/// storage contract.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
struct StoredTokens {
    #[serde(
        rename = "healthiq_access_token",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    access: Option<String>,
    #[serde(
        rename = "healthiq_refresh_token",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    refresh: Option<String>,
}

// =============================================================================
// MEMORY STORE
// =============================================================================

/// Process-local store for tests and short-lived embedders.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    inner: Mutex<StoredTokens>,
}

impl MemoryTokenStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl TokenStore for MemoryTokenStore {
    fn access_token(&self) -> Option<String> {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .access
            .clone()
    }

    fn refresh_token(&self) -> Option<String> {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .refresh
            .clone()
    }

    fn set_tokens(&self, access: &str, refresh: &str) {
        let mut inner = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        inner.access = Some(access.to_owned());
        inner.refresh = Some(refresh.to_owned());
    }

    fn clear_tokens(&self) {
        let mut inner = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        *inner = StoredTokens::default();
    }
}

// =============================================================================
// FILE STORE
// =============================================================================

/// Durable store backed by a JSON file, surviving process restarts. The file
/// is scoped to the OS user the way browser storage is scoped to a profile.
#[derive(Debug)]
pub struct FileTokenStore {
    path: PathBuf,
    /// Mirror of the file contents so reads stay off disk.
    cached: Mutex<StoredTokens>,
}

impl FileTokenStore {
    /// Open a store at `path`, loading any previously persisted pair.
    /// A missing or unreadable file starts the store empty.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let cached = load_tokens(&path);
        Self { path, cached: Mutex::new(cached) }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self, tokens: &StoredTokens) {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                if let Err(error) = std::fs::create_dir_all(parent) {
                    tracing::warn!(error = %error, path = %parent.display(), "token directory create failed");
                    return;
                }
            }
        }
        match serde_json::to_string_pretty(tokens) {
            Ok(json) => {
                if let Err(error) = std::fs::write(&self.path, json) {
                    tracing::warn!(error = %error, path = %self.path.display(), "token file write failed");
                }
            }
            Err(error) => {
                tracing::warn!(error = %error, "token serialization failed");
            }
        }
    }
}

impl TokenStore for FileTokenStore {
    fn access_token(&self) -> Option<String> {
        self.cached
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .access
            .clone()
    }

    fn refresh_token(&self) -> Option<String> {
        self.cached
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .refresh
            .clone()
    }

    fn set_tokens(&self, access: &str, refresh: &str) {
        let mut cached = self.cached.lock().unwrap_or_else(PoisonError::into_inner);
        cached.access = Some(access.to_owned());
        cached.refresh = Some(refresh.to_owned());
        self.persist(&cached);
    }

    fn clear_tokens(&self) {
        let mut cached = self.cached.lock().unwrap_or_else(PoisonError::into_inner);
        *cached = StoredTokens::default();
        self.persist(&cached);
    }
}

fn load_tokens(path: &Path) -> StoredTokens {
    match std::fs::read_to_string(path) {
        Ok(contents) => serde_json::from_str(&contents).unwrap_or_else(|error| {
            tracing::warn!(error = %error, path = %path.display(), "token file malformed; starting empty");
            StoredTokens::default()
        }),
        Err(_) => StoredTokens::default(),
    }
}
