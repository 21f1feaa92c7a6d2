// crates/katottg-core/src/service.rs

use crate::error::Result;
use crate::loader::RegistryFetch;
use crate::model::convert::build_directory;
use crate::model::{Directory, Settlement};
use std::sync::Arc;
use tokio::sync::OnceCell;
use tracing::info;

/// Lazily loaded, process-lifetime city directory.
///
/// Owns the built [`Directory`] and the loaded flag as instance state, so a
/// fresh service can be constructed per test (or per process) instead of
/// sharing module-level globals. Construct once at startup and hand it to
/// the request handler.
///
/// The first caller triggers the registry fetch; concurrent first callers
/// are serialized by the cell, so at most one fetch is in flight. A failed
/// load leaves the cell empty and the next call re-attempts from scratch.
pub struct CityDirectory {
    fetcher: Arc<dyn RegistryFetch>,
    cell: OnceCell<Directory>,
}

impl CityDirectory {
    pub fn new(fetcher: Arc<dyn RegistryFetch>) -> Self {
        CityDirectory {
            fetcher,
            cell: OnceCell::new(),
        }
    }

    /// Convenience constructor fetching from a snapshot URL.
    #[cfg(feature = "fetch")]
    pub fn from_url(url: impl Into<String>) -> Self {
        Self::new(Arc::new(crate::loader::HttpFetcher::new(url)))
    }

    /// Idempotent load: fetches and indexes the registry on first use, then
    /// returns the cached directory on every subsequent call.
    pub async fn ensure_loaded(&self) -> Result<&Directory> {
        self.cell
            .get_or_try_init(|| async {
                let entries = self.fetcher.fetch().await?;
                let directory = build_directory(entries);
                let stats = directory.stats();
                info!(
                    regions = stats.regions,
                    districts = stats.districts,
                    settlements = stats.settlements,
                    "loaded KATOTTG registry"
                );
                Ok(directory)
            })
            .await
    }

    /// Loads if necessary, then searches. See [`Directory::search`].
    pub async fn search(&self, query: &str, limit: usize) -> Result<Vec<Settlement>> {
        Ok(self.ensure_loaded().await?.search(query, limit))
    }

    /// Whether the registry has been fetched and indexed yet.
    pub fn loaded(&self) -> bool {
        self.cell.initialized()
    }
}
