//! Key-value storage for serialized blobs.

use std::{
    io,
    path::{Component, Path, PathBuf},
};

use tokio::fs;

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("invalid storage key: {0:?}")]
    InvalidKey(String),
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// A string-keyed store holding one text value per key.
#[allow(async_fn_in_trait)]
pub trait KeyValueStore {
    /// Returns the last value written under `key`, or `None` if nothing was.
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Replaces the value under `key`.
    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Keeps each key in its own JSON file below `root`.
///
/// A key like `entrega/itens` maps to `<root>/entrega/itens.json`. Writes go
/// to a sibling temp file first and are renamed into place.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, StorageError> {
        let relative = Path::new(key);
        let well_formed = !key.trim().is_empty()
            && !key.ends_with('/')
            && relative
                .components()
                .all(|component| matches!(component, Component::Normal(_)));
        if !well_formed {
            return Err(StorageError::InvalidKey(key.to_string()));
        }
        let mut path = self.root.join(relative);
        let file_name = match path.file_name() {
            Some(name) => format!("{}.json", name.to_string_lossy()),
            None => return Err(StorageError::InvalidKey(key.to_string())),
        };
        path.set_file_name(file_name);
        Ok(path)
    }
}

impl KeyValueStore for FileStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path).await {
            Ok(data) => Ok(Some(data)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await?;
        }
        let staging = path.with_extension("json.tmp");
        fs::write(&staging, value).await?;
        if let Err(err) = fs::rename(&staging, &path).await {
            let _ = fs::remove_file(&staging).await;
            return Err(err.into());
        }
        tracing::debug!(path = %path.display(), bytes = value.len(), "wrote storage blob");
        Ok(())
    }
}

#[cfg(test)]
pub use memory::MemoryStore;
