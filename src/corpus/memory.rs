use crate::error::{Error, Result};
use crate::source::types::Comic;

use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use std::collections::BTreeMap;

/// In-memory comic collection keyed by comic number.
///
/// Backed by a `DashMap`, so concurrent inserts from pipeline workers are safe
/// without an outer lock. Keys are unique: a second insert for the same ID is
/// rejected rather than overwriting.
#[derive(Default)]
pub struct Corpus {
    comics: DashMap<i64, Comic>,
}

impl Corpus {
    pub fn new() -> Self {
        Self {
            comics: DashMap::new(),
        }
    }

    pub fn member_of(&self, id: i64) -> bool {
        self.comics.contains_key(&id)
    }

    /// Stores `comic` under `id`, failing without mutation if `id` is taken.
    pub fn insert(&self, id: i64, comic: Comic) -> Result<()> {
        match self.comics.entry(id) {
            Entry::Occupied(_) => {
                tracing::warn!("id {} already present in corpus", id);
                Err(Error::DuplicateKey { id })
            }
            Entry::Vacant(slot) => {
                slot.insert(comic);
                Ok(())
            }
        }
    }

    /// Removes and returns the comic under `id`.
    pub fn delete(&self, id: i64) -> Result<Comic> {
        match self.comics.remove(&id) {
            Some((_, comic)) => Ok(comic),
            None => {
                tracing::warn!("invalid request: id {} not present in corpus", id);
                Err(Error::MissingKey { id })
            }
        }
    }

    pub fn get(&self, id: i64) -> Option<Comic> {
        self.comics.get(&id).map(|entry| entry.value().clone())
    }

    pub fn len(&self) -> usize {
        self.comics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.comics.is_empty()
    }

    /// All stored IDs in ascending order.
    pub fn ids(&self) -> Vec<i64> {
        let mut ids: Vec<i64> = self.comics.iter().map(|entry| *entry.key()).collect();
        ids.sort_unstable();
        ids
    }

    pub fn clear(&self) {
        self.comics.clear();
    }

    /// Encodes the whole corpus as one JSON object keyed by decimal ID.
    ///
    /// Keys are written in ascending order so equal corpora encode identically.
    pub fn serialize(&self) -> Result<Vec<u8>> {
        let snapshot: BTreeMap<i64, Comic> = self
            .comics
            .iter()
            .map(|entry| (*entry.key(), entry.value().clone()))
            .collect();

        serde_json::to_vec(&snapshot).map_err(Error::SnapshotEncode)
    }

    /// Merges a JSON object produced by [`Corpus::serialize`] into this corpus.
    ///
    /// The input is decoded completely before anything is stored, so malformed
    /// input leaves the corpus untouched. Entries whose ID is already present
    /// replace the stored comic. Returns the number of entries read.
    pub fn deserialize(&self, bytes: &[u8]) -> Result<usize> {
        let snapshot: BTreeMap<i64, Comic> = serde_json::from_slice(bytes).map_err(|e| {
            tracing::error!("Error loading into corpus: {}", e);
            Error::SnapshotDecode(e)
        })?;

        let count = snapshot.len();
        for (id, comic) in snapshot {
            self.comics.insert(id, comic);
        }
        Ok(count)
    }
}
