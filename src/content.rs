//! Content document loading, snapshot state, and refresh.
//!
//! The loader runs once at boot: remote copy first, bundled local copy on any
//! remote failure, fatal `LoadError` when both fail. After liftoff a single
//! best-effort refresh re-fetches the remote copy and replaces the snapshot
//! wholesale; a failed refresh keeps the existing snapshot and is never
//! retried early. The document is only ever replaced, never merged.

use std::sync::{Arc, RwLock};
use std::time::Duration;

use chrono::{Datelike, Utc};
use log::{info, warn};

use crate::config::SiteConfig;
use crate::models::content::ContentDocument;

/// Name stamped into the normalized copyright line.
const COPYRIGHT_NAME: &str = "PIOTR PORZUCZEK";

/// Remote fetches that take longer than this count as failed.
const FETCH_TIMEOUT_SECS: u64 = 15;

#[derive(Debug)]
pub struct LoadError(pub String);

impl std::fmt::Display for LoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Outcome of a best-effort refresh.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Refresh {
    Updated,
    KeptExisting,
}

/// The current content snapshot, shared via Rocket managed state.
///
/// Readers clone the `Arc`; a refresh swaps the whole `Arc` under a short
/// write lock. The lock is never held across I/O.
pub struct ContentState {
    inner: RwLock<Arc<ContentDocument>>,
}

impl ContentState {
    pub fn new(doc: ContentDocument) -> Self {
        ContentState {
            inner: RwLock::new(Arc::new(doc)),
        }
    }

    pub fn snapshot(&self) -> Arc<ContentDocument> {
        self.inner
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    pub fn replace(&self, doc: ContentDocument) {
        *self.inner.write().unwrap_or_else(|e| e.into_inner()) = Arc::new(doc);
    }
}

/// Overwrite the footer copyright with the current year. Applied at the load
/// boundary on every successful fetch, regardless of the source value.
pub fn normalize_copyright(doc: &mut ContentDocument) {
    doc.contact_info.footer.copyright =
        format!("© {} {}", Utc::now().year(), COPYRIGHT_NAME);
}

/// Fetch and deserialize the remote content document. Only a 2xx response
/// with a valid JSON body counts as success.
pub fn fetch_remote(url: &str) -> Result<ContentDocument, LoadError> {
    let client = reqwest::blocking::Client::builder()
        .timeout(Duration::from_secs(FETCH_TIMEOUT_SECS))
        .build()
        .map_err(|e| LoadError(format!("HTTP client error: {}", e)))?;

    let resp = client
        .get(url)
        .send()
        .map_err(|e| LoadError(format!("content fetch failed: {}", e)))?;

    if !resp.status().is_success() {
        return Err(LoadError(format!(
            "content endpoint returned {}",
            resp.status()
        )));
    }

    let mut doc: ContentDocument = resp
        .json()
        .map_err(|e| LoadError(format!("content JSON parse error: {}", e)))?;
    normalize_copyright(&mut doc);
    Ok(doc)
}

/// Read and deserialize the bundled local copy.
pub fn read_local(path: &str) -> Result<ContentDocument, LoadError> {
    let raw = std::fs::read_to_string(path)
        .map_err(|e| LoadError(format!("cannot read {}: {}", path, e)))?;
    let mut doc: ContentDocument = serde_json::from_str(&raw)
        .map_err(|e| LoadError(format!("{} is not a valid content document: {}", path, e)))?;
    normalize_copyright(&mut doc);
    Ok(doc)
}

/// Produce the boot-time document: remote first, local fallback, else fatal.
pub fn load(config: &SiteConfig) -> Result<ContentDocument, LoadError> {
    match fetch_remote(&config.content_url) {
        Ok(doc) => {
            info!("Loaded content document from {}", config.content_url);
            Ok(doc)
        }
        Err(remote_err) => {
            warn!(
                "Remote content fetch failed ({}), falling back to {}",
                remote_err, config.fallback_path
            );
            match read_local(&config.fallback_path) {
                Ok(doc) => {
                    info!("Loaded content document from {}", config.fallback_path);
                    Ok(doc)
                }
                Err(local_err) => Err(LoadError(format!(
                    "both content loads failed — remote: {}; local: {}",
                    remote_err, local_err
                ))),
            }
        }
    }
}

/// Append a `v={unix millis}` cache-buster, preserving any existing query.
pub fn cache_busted(raw: &str) -> String {
    match url::Url::parse(raw) {
        Ok(mut u) => {
            u.query_pairs_mut()
                .append_pair("v", &Utc::now().timestamp_millis().to_string());
            u.to_string()
        }
        Err(_) => raw.to_string(),
    }
}

/// One best-effort refresh: replace the snapshot on success, keep the
/// existing one on any failure. Never retried early, no backoff.
pub fn refresh(state: &ContentState, config: &SiteConfig) -> Refresh {
    match fetch_remote(&cache_busted(&config.content_url)) {
        Ok(doc) => {
            state.replace(doc);
            Refresh::Updated
        }
        Err(e) => {
            warn!("Content refresh failed ({}), keeping existing snapshot", e);
            Refresh::KeptExisting
        }
    }
}
