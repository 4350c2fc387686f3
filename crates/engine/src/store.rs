//! The module contains the storage contract shared by the file-backed stores.

use std::fs;
use std::path::Path;
use std::str::FromStr;

use crate::{EngineError, Product, ResultEngine};

/// Durable storage for the product collection.
///
/// Implementations read and rewrite the whole collection on every call: the
/// execution model is single-threaded and last-writer-wins, so there is no
/// locking and no incremental query.
pub trait ProductStore {
    /// Return the full collection. A missing backing file is an empty
    /// collection, not an error.
    fn all(&self) -> ResultEngine<Vec<Product>>;

    /// Append a product. No uniqueness check is performed, so duplicate ids
    /// are possible.
    fn add(&self, product: &Product) -> ResultEngine<()>;

    /// Replace the first stored record matching the product's id.
    ///
    /// Fails with [`EngineError::ProductNotFound`] when no record matches.
    fn update(&self, product: &Product) -> ResultEngine<()>;
}

/// File format backing a [`ProductStore`], selected from configuration at
/// startup.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StorageBackend {
    Csv,
    Json,
}

impl FromStr for StorageBackend {
    type Err = EngineError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.to_ascii_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            other => Err(EngineError::UnknownBackend(other.to_string())),
        }
    }
}

/// Replace `path` with `bytes` by writing a sibling temp file and renaming it
/// over the original, so a failed write never truncates the collection.
pub(crate) fn replace_file(path: &Path, bytes: &[u8]) -> ResultEngine<()> {
    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    let tmp = Path::new(&tmp);

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|err| EngineError::StorageWrite(err.to_string()))?;
    }

    fs::write(tmp, bytes).map_err(|err| EngineError::StorageWrite(err.to_string()))?;
    fs::rename(tmp, path).map_err(|err| {
        let _ = fs::remove_file(tmp);
        EngineError::StorageWrite(err.to_string())
    })
}
