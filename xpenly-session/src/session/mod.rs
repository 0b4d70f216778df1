mod config;
mod errors;
mod manager;
mod types;

pub use config::{SESSION_TOKEN_KEY, SESSION_USER_KEY};
pub use errors::SessionError;
pub use manager::{HydrationOutcome, HydrationToken, SessionManager};
pub use types::{AuthUser, SessionSnapshot, parse_user};
