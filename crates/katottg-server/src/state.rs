use std::sync::Arc;

use katottg_core::CityDirectory;

use crate::config::Config;

#[derive(Clone)]
pub struct AppState {
    pub directory: Arc<CityDirectory>,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        AppState {
            directory: Arc::new(CityDirectory::from_url(config.registry_url.clone())),
        }
    }

    /// Used by tests to inject a directory with a stub fetcher.
    pub fn with_directory(directory: Arc<CityDirectory>) -> Self {
        AppState { directory }
    }
}
