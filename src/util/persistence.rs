use crate::{
    domain::{EntryStore, StoreError},
    infra::storage::FileStore,
    util::config::{AppConfig, ConfigError},
};

pub type AppStore = EntryStore<FileStore>;

#[derive(Debug, thiserror::Error)]
pub enum OpenStoreError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Store(#[from] StoreError),
}

pub fn storage_for(config: &AppConfig) -> Result<FileStore, ConfigError> {
    config.require_data_dir().map(FileStore::new)
}

/// Opens the file-backed store under the configured data directory and
/// reads the saved entries.
pub async fn open_entry_store(config: &AppConfig) -> Result<AppStore, OpenStoreError> {
    let storage = storage_for(config)?;
    tracing::info!(root = %storage.root().display(), "opening entry store");
    Ok(EntryStore::load(storage).await?)
}
