use std::env;

use super::types::{FileSessionStore, InMemorySessionStore, SessionStore};
use crate::storage::errors::StorageError;

/// Build a session store from the environment.
///
/// `SESSION_STORE_TYPE` selects the backend (`memory` when unset);
/// the `file` backend additionally requires `SESSION_STORE_PATH`.
/// The store is returned to the caller and injected into the
/// session manager rather than installed as a process-wide global.
pub fn session_store_from_env() -> Result<Box<dyn SessionStore>, StorageError> {
    let store_type = env::var("SESSION_STORE_TYPE").unwrap_or_else(|_| "memory".to_string());

    tracing::info!("Initializing session store with type: {}", store_type);

    match store_type.as_str() {
        "memory" => Ok(Box::new(InMemorySessionStore::new())),
        "file" => {
            let path = env::var("SESSION_STORE_PATH").map_err(|_| {
                StorageError::Storage(
                    "SESSION_STORE_PATH must be set for the file session store".to_string(),
                )
            })?;
            Ok(Box::new(FileSessionStore::new(path)))
        }
        t => Err(StorageError::Storage(format!(
            "Unsupported session store type: {t}. Supported types are 'memory' and 'file'"
        ))),
    }
}
