// crates/katottg-core/src/model/snapshot.rs
//
// Binary snapshot cache of a built directory. The CLI writes one next to
// its source file so repeated invocations skip refetching and reindexing;
// the server never touches disk and keeps the directory in memory.

use super::domain::Directory;
use crate::error::{RegistryError, Result};
use crate::loader::open_stream;
use bincode::Options;
use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::Path;

/// File suffix appended to the source snapshot name for the cache.
#[cfg(feature = "compact")]
pub const SNAPSHOT_SUFFIX: &str = ".dir.bin.gz";
#[cfg(not(feature = "compact"))]
pub const SNAPSHOT_SUFFIX: &str = ".dir.bin";

// Deserialization cap against corrupt or malicious cache files.
const SNAPSHOT_SIZE_LIMIT: u64 = 256 * 1024 * 1024;

impl Directory {
    /// Serializes the directory to a binary snapshot. Paths ending in `.gz`
    /// are gzip-compressed (requires the `compact` feature).
    pub fn save_as(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let file = File::create(path)?;
        let writer = BufWriter::new(file);

        let mut sink: Box<dyn Write> = if path.extension().is_some_and(|ext| ext == "gz") {
            #[cfg(feature = "compact")]
            {
                Box::new(flate2::write::GzEncoder::new(
                    writer,
                    flate2::Compression::default(),
                ))
            }
            #[cfg(not(feature = "compact"))]
            {
                return Err(RegistryError::InvalidData(
                    "gzip output requires the 'compact' feature".into(),
                ));
            }
        } else {
            Box::new(writer)
        };

        bincode::DefaultOptions::new()
            .with_limit(SNAPSHOT_SIZE_LIMIT)
            .serialize_into(&mut sink, self)?;
        sink.flush()?;
        Ok(())
    }

    /// Loads a directory from a binary snapshot written by [`Directory::save_as`].
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        let mut reader = open_stream(path.as_ref())?;
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        Self::from_bytes(&data)
    }

    /// Reconstructs a directory from serialized snapshot bytes.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        bincode::DefaultOptions::new()
            .with_limit(SNAPSHOT_SIZE_LIMIT)
            .allow_trailing_bytes()
            .deserialize(data)
            .map_err(RegistryError::Bincode)
    }
}
