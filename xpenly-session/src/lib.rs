//! xpenly-session - Session and route-guard core for the Xpenly admin console
//!
//! This crate owns the authenticated-session state machine behind the
//! admin console: a durable session store, the session manager
//! (hydration, login, logout), the role-aware route guard, and the
//! route table the shell dispatches navigations through. The CRUD
//! views themselves are collaborators that consume `SessionSnapshot`
//! and `Navigation` values.

mod api;
mod config;
mod guard;
mod router;
mod session;
mod storage;

#[cfg(test)]
mod test_utils;

pub use config::{ADMIN_ROLE, HOME_PATH, LOGIN_PATH};

pub use storage::{
    FileSessionStore, InMemorySessionStore, SessionStore, StorageError, session_store_from_env,
};

pub use session::{
    AuthUser, HydrationOutcome, HydrationToken, SESSION_TOKEN_KEY, SESSION_USER_KEY, SessionError,
    SessionManager, SessionSnapshot, parse_user,
};

pub use guard::{GuardDecision, RouteAccess, evaluate_route};

pub use router::{Navigation, Route, RouteTable, post_login_destination};

pub use api::{AdminApiClient, ApiError, LoginRequest, LoginResponse};
