// crates/katottg-core/src/error.rs

use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, RegistryError>;

/// Everything that can go wrong while fetching, parsing, or caching the
/// KATOTTG registry.
///
/// Loading is all-or-nothing: none of these variants leaves a partially
/// populated directory behind, so a caller may simply retry the whole
/// operation. The crate never retries internally.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// Transport-level failure while downloading the registry snapshot.
    #[cfg(feature = "fetch")]
    #[error("registry request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The snapshot host answered with a non-success status.
    #[error("registry responded with HTTP {0}")]
    Status(u16),

    /// The snapshot is not valid JSON or does not match the expected shape.
    #[error("malformed registry document: {0}")]
    Json(#[from] serde_json::Error),

    /// The document parsed but carries no entries at all.
    #[error("registry document contains no entries")]
    EmptyRegistry,

    #[error("{0}")]
    NotFound(String),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// Binary snapshot (de)serialization failure.
    #[error("snapshot codec error: {0}")]
    Bincode(#[from] bincode::Error),

    #[error("{0}")]
    InvalidData(String),
}
