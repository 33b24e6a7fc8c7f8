use crate::infra::storage::{KeyValueStore, StorageError};

use super::entry::{next_entry_id, now_millis, Entry, EntryDraft};

/// Storage key holding the whole entry collection.
pub const ENTRIES_KEY: &str = "entrega/itens";

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error("saved entries are malformed: {0}")]
    Decode(#[source] serde_json::Error),
    #[error("failed to encode entries: {0}")]
    Encode(#[source] serde_json::Error),
}

/// The ordered entry collection, written through to `S` on every change.
#[derive(Clone, Debug, PartialEq)]
pub struct EntryStore<S> {
    storage: S,
    entries: Vec<Entry>,
}

impl<S: KeyValueStore> EntryStore<S> {
    pub async fn load(storage: S) -> Result<Self, StoreError> {
        let entries = match storage.get(ENTRIES_KEY).await? {
            Some(raw) => decode_entries(&raw)?,
            None => Vec::new(),
        };
        tracing::info!(count = entries.len(), "loaded entries");
        Ok(Self { storage, entries })
    }

    /// Appends a new entry built from `draft`. A blank name is ignored and
    /// yields `Ok(None)` without touching storage.
    pub async fn add(&mut self, draft: EntryDraft) -> Result<Option<Entry>, StoreError> {
        let id = next_entry_id(&self.entries, now_millis());
        let Some(entry) = draft.into_entry(id) else {
            tracing::warn!("ignoring entry with a blank name");
            return Ok(None);
        };

        let mut next = self.entries.clone();
        next.push(entry.clone());
        self.persist(next).await?;
        tracing::info!(id = %entry.id, name = %entry.name, "added entry");
        Ok(Some(entry))
    }

    /// Drops the entry with `id` if present and saves the collection either
    /// way. Returns whether an entry was removed.
    pub async fn remove(&mut self, id: &str) -> Result<bool, StoreError> {
        let mut next = self.entries.clone();
        next.retain(|entry| entry.id != id);
        let removed = next.len() != self.entries.len();
        self.persist(next).await?;
        tracing::info!(%id, removed, "removed entry");
        Ok(removed)
    }

    async fn persist(&mut self, next: Vec<Entry>) -> Result<(), StoreError> {
        let json = encode_entries(&next)?;
        if let Err(err) = self.storage.set(ENTRIES_KEY, &json).await {
            tracing::error!(error = %err, "failed to save entries");
            return Err(err.into());
        }
        self.entries = next;
        Ok(())
    }
}

impl<S> EntryStore<S> {
    pub fn list(&self) -> &[Entry] {
        &self.entries
    }

    pub fn get(&self, id: &str) -> Option<&Entry> {
        self.entries.iter().find(|entry| entry.id == id)
    }
}

pub fn encode_entries(entries: &[Entry]) -> Result<String, StoreError> {
    serde_json::to_string(entries).map_err(StoreError::Encode)
}

pub fn decode_entries(raw: &str) -> Result<Vec<Entry>, StoreError> {
    serde_json::from_str(raw).map_err(StoreError::Decode)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::storage::MemoryStore;

    fn draft(name: &str, price: &str, freight: &str) -> EntryDraft {
        EntryDraft {
            name: name.to_string(),
            price: price.to_string(),
            freight: freight.to_string(),
            ..EntryDraft::default()
        }
    }

    async fn seeded(names: &[&str]) -> EntryStore<MemoryStore> {
        let mut store = EntryStore::load(MemoryStore::default()).await.unwrap();
        for name in names {
            store.add(draft(name, "10", "1")).await.unwrap();
        }
        store
    }

    #[tokio::test]
    async fn load_without_blob_starts_empty() {
        let store = EntryStore::load(MemoryStore::default()).await.unwrap();
        assert!(store.list().is_empty());
    }

    #[tokio::test]
    async fn load_rejects_malformed_blob() {
        let storage = MemoryStore::with_value(ENTRIES_KEY, "{not json");
        let err = EntryStore::load(storage).await.unwrap_err();
        assert!(matches!(err, StoreError::Decode(_)));
    }

    #[tokio::test]
    async fn add_appends_one_entry_and_persists() {
        let storage = MemoryStore::default();
        let mut store = EntryStore::load(storage.clone()).await.unwrap();

        let added = store
            .add(EntryDraft {
                name: " Headphones ".to_string(),
                category: "Audio".to_string(),
                price: "199,90".to_string(),
                freight: "oops".to_string(),
                weight: "0.3".to_string(),
            })
            .await
            .unwrap()
            .unwrap();

        assert_eq!(store.list().len(), 1);
        assert_eq!(store.list()[0], added);
        assert_eq!(added.name, " Headphones ");
        assert_eq!(added.price, 199.9);
        assert_eq!(added.freight, 0.0);
        assert_eq!(added.weight, 0.3);

        let saved = decode_entries(&storage.raw(ENTRIES_KEY).unwrap()).unwrap();
        assert_eq!(saved, store.list());
    }

    #[tokio::test]
    async fn whitespace_name_is_a_no_op() {
        let storage = MemoryStore::default();
        let mut store = EntryStore::load(storage.clone()).await.unwrap();
        let result = store.add(draft(" \t ", "5", "5")).await.unwrap();

        assert!(result.is_none());
        assert!(store.list().is_empty());
        assert!(storage.raw(ENTRIES_KEY).is_none());
    }

    #[tokio::test]
    async fn ids_stay_unique_when_added_in_the_same_millisecond() {
        let store = seeded(&["a", "b", "c", "d"]).await;
        let mut ids: Vec<_> = store.list().iter().map(|e| e.id.clone()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 4);
    }

    #[tokio::test]
    async fn remove_unknown_id_keeps_collection() {
        let storage = MemoryStore::default();
        let mut store = EntryStore::load(storage.clone()).await.unwrap();
        for name in ["a", "b"] {
            store.add(draft(name, "1", "1")).await.unwrap();
        }
        let before = store.list().to_vec();

        assert!(!store.remove("does-not-exist").await.unwrap());
        assert_eq!(store.list(), before.as_slice());
        let saved = decode_entries(&storage.raw(ENTRIES_KEY).unwrap()).unwrap();
        assert_eq!(saved, before);
    }

    #[tokio::test]
    async fn remove_on_empty_store_still_writes() {
        let storage = MemoryStore::default();
        let mut store = EntryStore::load(storage.clone()).await.unwrap();

        assert!(!store.remove("missing").await.unwrap());
        assert_eq!(storage.raw(ENTRIES_KEY).as_deref(), Some("[]"));
    }

    #[tokio::test]
    async fn remove_known_id_drops_only_that_entry() {
        let storage = MemoryStore::default();
        let mut store = EntryStore::load(storage.clone()).await.unwrap();
        for name in ["a", "b", "c"] {
            store.add(draft(name, "1", "1")).await.unwrap();
        }
        let target = store.list()[1].id.clone();

        assert!(store.remove(&target).await.unwrap());
        assert_eq!(store.list().len(), 2);
        assert!(store.get(&target).is_none());
        let names: Vec<_> = store.list().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["a", "c"]);

        let saved = decode_entries(&storage.raw(ENTRIES_KEY).unwrap()).unwrap();
        assert_eq!(saved.len(), 2);
    }

    #[tokio::test]
    async fn reload_restores_order_and_values() {
        let storage = MemoryStore::default();
        let mut store = EntryStore::load(storage.clone()).await.unwrap();
        for (name, price) in [("first", "1.5"), ("second", "2"), ("third", "")] {
            store.add(draft(name, price, "3")).await.unwrap();
        }

        let reloaded = EntryStore::load(storage).await.unwrap();
        assert_eq!(reloaded.list(), store.list());
    }

    #[tokio::test]
    async fn failed_write_leaves_memory_untouched() {
        let storage = MemoryStore::default();
        let mut store = EntryStore::load(storage.clone()).await.unwrap();
        store.add(draft("kept", "1", "1")).await.unwrap();

        storage.fail_writes(true);
        let err = store.add(draft("lost", "1", "1")).await.unwrap_err();
        assert!(matches!(err, StoreError::Storage(_)));
        let kept_id = store.list()[0].id.clone();
        assert!(store.remove(&kept_id).await.is_err());
        assert_eq!(store.list().len(), 1);
        assert_eq!(store.list()[0].name, "kept");
    }

    #[test]
    fn encode_writes_english_field_names() {
        let entry = draft("Mouse", "30", "5").into_entry("9".to_string()).unwrap();
        let json = encode_entries(&[entry]).unwrap();
        assert_eq!(
            json,
            r#"[{"id":"9","name":"Mouse","category":"","price":30.0,"freight":5.0,"weight":0.0}]"#
        );
    }
}
