use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use bytes::Bytes;
use chrono::Utc;

use super::models::FileRecord;

struct Inner {
    next_id: u64,
    records: Vec<FileRecord>,
}

/// The in-memory file registry.
///
/// Insert/read-only for the lifetime of the process: no update, no delete,
/// no eviction. Ids start at 1 and are assigned in insertion order; id
/// allocation and the insert happen under a single lock acquisition, so two
/// concurrent inserts can never receive the same id and `list_all` order
/// always matches id order.
pub struct Registry {
    inner: Arc<Mutex<Inner>>,
}

impl Clone for Registry {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl Registry {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner {
                next_id: 1,
                records: Vec::new(),
            })),
        }
    }

    /// Store an upload that already passed validation. Returns the created
    /// record, including its assigned id. The returned record is a view
    /// sharing the payload bytes, not a competing mutable copy.
    pub fn insert(&self, name: &str, media_type: &str, data: Bytes) -> FileRecord {
        let mut inner = self.lock();
        let record = FileRecord {
            id: inner.next_id,
            name: name.to_string(),
            media_type: media_type.to_string(),
            size: data.len() as u64,
            data,
            uploaded_at: Utc::now(),
        };
        inner.next_id += 1;
        inner.records.push(record.clone());
        record
    }

    /// Every stored record, in insertion order.
    pub fn list_all(&self) -> Vec<FileRecord> {
        self.lock().records.clone()
    }

    /// Look up a record by id.
    pub fn get(&self, id: u64) -> Option<FileRecord> {
        if id == 0 {
            return None;
        }
        // Ids are dense (1..=len), so the vec doubles as the index.
        self.lock().records.get(id as usize - 1).cloned()
    }

    pub fn len(&self) -> usize {
        self.lock().records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // A poisoned lock only means another thread panicked mid-call; every
    // mutation is a single push, so the inner state is still consistent.
    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
