//! katottg-core prelude: bring common types and traits into scope for demos.

#![allow(unused_imports)]

pub use crate::error::{RegistryError, Result};
pub use crate::loader::{parse_entries, FileFetcher, RegistryFetch, DEFAULT_REGISTRY_URL};
#[cfg(feature = "fetch")]
pub use crate::loader::HttpFetcher;
pub use crate::model::convert::build_directory;
pub use crate::model::{Directory, DirectoryStats, Settlement, SettlementKind, REGION_LABEL};
pub use crate::raw::{Category, RawEntry, RegistryDocument};
pub use crate::service::CityDirectory;
pub use crate::text::{equals_folded, fold_key, uk_cmp};
