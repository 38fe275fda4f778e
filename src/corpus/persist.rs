//! Snapshot files.
//!
//! A snapshot is exactly the bytes of [`Corpus::serialize`]; there is no
//! envelope or version field.

use super::memory::Corpus;
use crate::error::{Error, Result};

use std::ffi::OsString;
use std::path::{Path, PathBuf};

impl Corpus {
    /// Writes the whole corpus to `path`.
    ///
    /// The bytes go to a sibling `.tmp` file first and are renamed over `path`,
    /// so readers never observe a half-written snapshot.
    pub async fn save_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let encoded = self.serialize()?;
        let staging = staging_path(path);

        tokio::fs::write(&staging, &encoded)
            .await
            .map_err(|source| io_error(&staging, source))?;
        tokio::fs::rename(&staging, path)
            .await
            .map_err(|source| io_error(path, source))?;

        tracing::info!(
            "Saved {} comics ({} bytes) to {}",
            self.len(),
            encoded.len(),
            path.display()
        );
        Ok(())
    }

    /// Reads `path` and merges its snapshot into the corpus.
    pub async fn load_from_file(&self, path: impl AsRef<Path>) -> Result<usize> {
        let path = path.as_ref();
        let bytes = tokio::fs::read(path)
            .await
            .map_err(|source| io_error(path, source))?;

        let count = self.deserialize(&bytes)?;
        tracing::info!("Loaded {} comics from {}", count, path.display());
        Ok(count)
    }
}

fn staging_path(path: &Path) -> PathBuf {
    let mut name: OsString = path.file_name().map(OsString::from).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

fn io_error(path: &Path, source: std::io::Error) -> Error {
    tracing::error!("Error accessing {}: {}", path.display(), source);
    Error::Io {
        path: path.to_path_buf(),
        source,
    }
}
