use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::session::config::{SESSION_TOKEN_KEY, SESSION_USER_KEY};
use crate::session::errors::SessionError;
use crate::session::types::{AuthUser, SessionSnapshot, parse_user};
use crate::storage::{SessionStore, session_store_from_env};

/// Cancellation token for the startup hydration task.
///
/// The owner of the manager cancels the token when it is torn down
/// during hydration; the task then abandons its result instead of
/// committing state nobody owns anymore.
#[derive(Debug, Clone, Default)]
pub struct HydrationToken(Arc<AtomicBool>);

impl HydrationToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HydrationOutcome {
    /// A valid persisted session was restored.
    Restored,
    /// No usable persisted session; the manager is anonymous.
    Anonymous,
    /// The token was cancelled; in-memory state was left untouched.
    Cancelled,
}

/// What the persistent store held, after joint validation.
enum Persisted {
    Valid { token: String, user: AuthUser },
    Empty,
    Invalid,
}

/// Exclusive owner of the in-memory session and sole writer of the
/// persistent store.
///
/// The manager starts in the loading state; `hydrate` moves it to
/// authenticated or anonymous exactly as the persisted data allows,
/// and `login`/`logout` are the only mutations after that.
pub struct SessionManager {
    store: Box<dyn SessionStore>,
    token: Option<String>,
    user: Option<AuthUser>,
    loading: bool,
}

impl SessionManager {
    pub fn new(store: Box<dyn SessionStore>) -> Self {
        Self {
            store,
            token: None,
            user: None,
            loading: true,
        }
    }

    /// Build a manager over the store selected by the environment.
    pub fn from_env() -> Result<Self, SessionError> {
        Ok(Self::new(session_store_from_env()?))
    }

    /// Restore the session from the persistent store.
    ///
    /// Read failures count as absent data, partial or malformed data
    /// is purged from both keys, and the loading gate is released on
    /// every non-cancelled path. Safe to run more than once.
    pub async fn hydrate(&mut self, cancel: &HydrationToken) -> HydrationOutcome {
        let persisted = self.load_persisted().await;

        if cancel.is_cancelled() {
            tracing::debug!("Hydration cancelled; discarding result");
            return HydrationOutcome::Cancelled;
        }

        let outcome = match persisted {
            Persisted::Valid { token, user } => {
                tracing::debug!(user_id = %user.id, "Restored persisted session");
                self.token = Some(token);
                self.user = Some(user);
                HydrationOutcome::Restored
            }
            Persisted::Empty | Persisted::Invalid => {
                self.token = None;
                self.user = None;
                HydrationOutcome::Anonymous
            }
        };
        self.loading = false;
        outcome
    }

    async fn load_persisted(&mut self) -> Persisted {
        let raw_token = self
            .store
            .get(SESSION_TOKEN_KEY.as_str())
            .await
            .unwrap_or_else(|e| {
                tracing::warn!("Failed to read token from session store: {}", e);
                None
            });
        let raw_user = self
            .store
            .get(SESSION_USER_KEY.as_str())
            .await
            .unwrap_or_else(|e| {
                tracing::warn!("Failed to read user from session store: {}", e);
                None
            });

        let had_data = raw_token.is_some() || raw_user.is_some();

        let token = raw_token.filter(|t| !t.trim().is_empty());
        let user = raw_user
            .as_deref()
            .and_then(|raw| match parse_user(raw) {
                Ok(user) => Some(user),
                Err(e) => {
                    tracing::debug!("Persisted user record did not parse: {}", e);
                    None
                }
            })
            .filter(AuthUser::is_valid);

        match (token, user) {
            (Some(token), Some(user)) => Persisted::Valid { token, user },
            _ if had_data => {
                tracing::warn!("Purging partial or stale session data from store");
                self.purge_persisted().await;
                Persisted::Invalid
            }
            _ => Persisted::Empty,
        }
    }

    /// Establish a session, all-or-nothing.
    ///
    /// Input is validated before any I/O; if either store write
    /// fails, both keys are purged and in-memory state is left
    /// unchanged, so a half-written session is never observable.
    pub async fn login(&mut self, token: &str, user: AuthUser) -> Result<(), SessionError> {
        if token.trim().is_empty() || !user.is_valid() {
            return Err(SessionError::InvalidLogin(
                "token and user with id are required".to_string(),
            ));
        }

        let serialized = serde_json::to_string(&user).map_err(|e| {
            SessionError::Parse(e.to_string())
        })?;

        let token_saved = self.store.set(SESSION_TOKEN_KEY.as_str(), token).await;
        let user_saved = self
            .store
            .set(SESSION_USER_KEY.as_str(), &serialized)
            .await;

        if let Err(e) = token_saved.and(user_saved) {
            tracing::error!("Failed to persist session, rolling back: {}", e);
            self.purge_persisted().await;
            return Err(e.into());
        }

        tracing::debug!(user_id = %user.id, "Session established");
        self.token = Some(token.to_string());
        self.user = Some(user);
        Ok(())
    }

    /// Clear the session from memory and store. Idempotent.
    pub async fn logout(&mut self) {
        self.purge_persisted().await;
        self.token = None;
        self.user = None;
        tracing::debug!("Session cleared");
    }

    async fn purge_persisted(&mut self) {
        if let Err(e) = self.store.remove(SESSION_TOKEN_KEY.as_str()).await {
            tracing::warn!("Failed to remove token from session store: {}", e);
        }
        if let Err(e) = self.store.remove(SESSION_USER_KEY.as_str()).await {
            tracing::warn!("Failed to remove user from session store: {}", e);
        }
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            loading: self.loading,
            token: self.token.clone(),
            user: self.user.clone(),
        }
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_authenticated(&self) -> bool {
        self.snapshot().is_authenticated()
    }

    pub fn is_admin(&self) -> bool {
        self.snapshot().is_admin()
    }

    /// Read access to the underlying store, for diagnostics.
    pub fn store(&self) -> &dyn SessionStore {
        self.store.as_ref()
    }
}
