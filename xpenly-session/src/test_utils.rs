//! Shared test doubles for the session core.

use async_trait::async_trait;
use std::collections::HashSet;

use crate::storage::{InMemorySessionStore, SessionStore, StorageError};

/// An in-memory store that can be told to fail specific writes or
/// every read, for exercising rollback and degraded-storage paths.
pub(crate) struct WriteFailStore {
    inner: InMemorySessionStore,
    fail_writes: HashSet<String>,
    fail_reads: bool,
}

impl WriteFailStore {
    pub(crate) fn new() -> Self {
        Self::with_inner(InMemorySessionStore::new())
    }

    pub(crate) fn with_inner(inner: InMemorySessionStore) -> Self {
        Self {
            inner,
            fail_writes: HashSet::new(),
            fail_reads: false,
        }
    }

    /// Fail every `set` for the given key.
    pub(crate) fn fail_writes_for(mut self, key: &str) -> Self {
        self.fail_writes.insert(key.to_string());
        self
    }

    /// Fail every `get`, simulating disabled storage.
    pub(crate) fn fail_all_reads(mut self) -> Self {
        self.fail_reads = true;
        self
    }
}

#[async_trait]
impl SessionStore for WriteFailStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        if self.fail_reads {
            return Err(StorageError::Storage("storage disabled".to_string()));
        }
        self.inner.get(key).await
    }

    async fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.fail_writes.contains(key) {
            return Err(StorageError::Storage(format!("write refused for {key}")));
        }
        self.inner.set(key, value).await
    }

    async fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        self.inner.remove(key).await
    }
}

/// Build an in-memory store pre-seeded with raw key/value pairs.
pub(crate) async fn seeded_store(pairs: &[(&str, &str)]) -> InMemorySessionStore {
    let mut store = InMemorySessionStore::new();
    for (key, value) in pairs {
        store.set(key, value).await.expect("seeding cannot fail");
    }
    store
}
