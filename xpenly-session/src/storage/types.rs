use async_trait::async_trait;
use std::collections::HashMap;
use std::path::PathBuf;

use crate::storage::errors::StorageError;

pub struct InMemorySessionStore {
    pub(super) entry: HashMap<String, String>,
}

pub struct FileSessionStore {
    pub(super) path: PathBuf,
}

/// Durable key-value surface the session manager persists into.
///
/// Implementations must represent every underlying failure as an
/// `Err` value; the session manager maps read failures to "absent"
/// and write failures to a rejected operation. Nothing here panics.
#[async_trait]
pub trait SessionStore: Send + Sync + 'static {
    /// Read the raw string stored under `key`, if any.
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Persist `value` under `key`, overwriting any previous value.
    async fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove `key`. Removing an absent key is not an error.
    async fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}
