mod config;
mod errors;
mod file;
mod memory;
mod types;

pub use config::session_store_from_env;
pub use errors::StorageError;
pub use types::{FileSessionStore, InMemorySessionStore, SessionStore};
