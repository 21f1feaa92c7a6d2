// crates/katottg-core/src/loader/mod.rs

//! # Registry Loader
//!
//! Handles the physical layer (HTTPS download, file I/O, decompression) and
//! document parsing. The [`RegistryFetch`] trait is the seam between the
//! lazy-load service and the transport, which keeps the service testable
//! with stub fetchers.

use crate::error::{RegistryError, Result};
use crate::raw::{RawEntry, RegistryDocument};
use async_trait::async_trait;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

/// Public snapshot of the KATOTTG classifier, mirrored as JSON.
pub const DEFAULT_REGISTRY_URL: &str =
    "https://raw.githubusercontent.com/novado-ua/katottg-json/main/katottg.json";

/// One registry download. Implementations do not retry; a failed fetch is
/// surfaced to the caller, which may re-attempt the whole operation.
#[async_trait]
pub trait RegistryFetch: Send + Sync {
    async fn fetch(&self) -> Result<Vec<RawEntry>>;
}

/// Fetches the registry snapshot over HTTPS.
#[cfg(feature = "fetch")]
pub struct HttpFetcher {
    client: reqwest::Client,
    url: String,
}

#[cfg(feature = "fetch")]
impl HttpFetcher {
    pub fn new(url: impl Into<String>) -> Self {
        HttpFetcher {
            client: reqwest::Client::new(),
            url: url.into(),
        }
    }
}

#[cfg(feature = "fetch")]
impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new(DEFAULT_REGISTRY_URL)
    }
}

#[cfg(feature = "fetch")]
#[async_trait]
impl RegistryFetch for HttpFetcher {
    async fn fetch(&self) -> Result<Vec<RawEntry>> {
        let response = self.client.get(&self.url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(RegistryError::Status(status.as_u16()));
        }
        let body = response.bytes().await?;
        parse_entries(&body)
    }
}

/// Reads a registry snapshot from disk (plain JSON, or `.json.gz` with the
/// `compact` feature). Used by the CLI and by tests.
pub struct FileFetcher {
    path: PathBuf,
}

impl FileFetcher {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileFetcher { path: path.into() }
    }
}

#[async_trait]
impl RegistryFetch for FileFetcher {
    async fn fetch(&self) -> Result<Vec<RawEntry>> {
        let mut reader = open_stream(&self.path)?;
        let mut buf = Vec::new();
        reader.read_to_end(&mut buf)?;
        parse_entries(&buf)
    }
}

/// Parses a snapshot document and validates that it carries entries.
/// Accepts both publication shapes (bare array, `items` wrapper).
pub fn parse_entries(bytes: &[u8]) -> Result<Vec<RawEntry>> {
    let document: RegistryDocument = serde_json::from_slice(bytes)?;
    let entries = document.into_entries();
    if entries.is_empty() {
        return Err(RegistryError::EmptyRegistry);
    }
    Ok(entries)
}

// -----------------------------------------------------------------------
// TRANSPORT HELPERS (shared by FileFetcher and the snapshot cache)
// -----------------------------------------------------------------------

/// Opens a file, buffers it, and wraps it in a gzip decoder when the path
/// ends in `.gz`. Returns a generic reader so the caller doesn't care about
/// the compression.
pub fn open_stream(path: &Path) -> Result<Box<dyn Read>> {
    let file = File::open(path).map_err(|e| {
        RegistryError::NotFound(format!("snapshot not found at {}: {}", path.display(), e))
    })?;
    let reader = BufReader::new(file);

    if path.extension().is_some_and(|ext| ext == "gz") {
        #[cfg(feature = "compact")]
        {
            return Ok(Box::new(flate2::read::GzDecoder::new(reader)));
        }
        #[cfg(not(feature = "compact"))]
        {
            return Err(RegistryError::InvalidData(
                "gzip input requires the 'compact' feature".into(),
            ));
        }
    }

    Ok(Box::new(reader))
}

/// Sibling path for the binary cache of a source snapshot.
pub fn cache_path(source: &Path, suffix: &str) -> PathBuf {
    let filename = source
        .file_name()
        .map(|f| f.to_string_lossy().into_owned())
        .unwrap_or_default();
    source.with_file_name(format!("{filename}{suffix}"))
}

/// A cache is fresh while the source snapshot has not been modified after it.
pub fn is_cache_fresh(source: &Path, cache: &Path) -> bool {
    let cache_time = match std::fs::metadata(cache).and_then(|m| m.modified()) {
        Ok(m) => m,
        Err(_) => return false,
    };
    match std::fs::metadata(source).and_then(|m| m.modified()) {
        Ok(source_time) => source_time <= cache_time,
        Err(_) => false,
    }
}
