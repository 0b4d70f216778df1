//! Role-aware render decision for protected routes.

use crate::config::ADMIN_ROLE;
use crate::session::SessionSnapshot;

/// Access constraint attached to a route definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteAccess {
    /// No session required.
    Public,
    /// Any authenticated user.
    RequiresAuth,
    /// An authenticated user carrying this exact role.
    RequiresRole(String),
}

impl RouteAccess {
    pub fn admin() -> Self {
        Self::RequiresRole(ADMIN_ROLE.to_string())
    }
}

/// Outcome of evaluating a navigation attempt against the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    /// Hydration has not finished; render a neutral placeholder and
    /// nothing else. Redirecting here would flash before the
    /// persisted session has been read.
    Loading,
    /// Render the protected content.
    Render,
    /// Not authenticated; go to login carrying the attempted path.
    RedirectToLogin { from: String },
    /// Authenticated but lacking the required role.
    Forbidden { from: String },
}

/// Evaluate the ordered decision table for one navigation attempt.
///
/// First match wins: loading gate, authentication, then role.
pub fn evaluate_route(
    snapshot: &SessionSnapshot,
    access: &RouteAccess,
    path: &str,
) -> GuardDecision {
    if snapshot.loading {
        return GuardDecision::Loading;
    }

    if matches!(access, RouteAccess::Public) {
        return GuardDecision::Render;
    }

    if !snapshot.is_authenticated() {
        return GuardDecision::RedirectToLogin {
            from: path.to_string(),
        };
    }

    if let RouteAccess::RequiresRole(required) = access {
        let denied = if required == ADMIN_ROLE {
            !snapshot.is_admin()
        } else {
            snapshot.role() != Some(required.as_str())
        };
        if denied {
            tracing::warn!(path, required_role = %required, "Navigation denied: role mismatch");
            return GuardDecision::Forbidden {
                from: path.to_string(),
            };
        }
    }

    GuardDecision::Render
}
