//! Route table and top-level navigation dispatch.

use crate::config::{HOME_PATH, LOGIN_PATH};
use crate::guard::{GuardDecision, RouteAccess, evaluate_route};
use crate::session::SessionSnapshot;

#[derive(Debug, Clone)]
pub struct Route {
    pub path: String,
    pub access: RouteAccess,
}

/// What the shell should do with a navigation attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    /// Hydration pending; show the neutral placeholder.
    Loading,
    /// Show the login view.
    RenderLogin,
    /// Render the matched view.
    Render { path: String },
    /// Go to the default home route.
    RedirectHome,
    /// Go to login, optionally carrying the attempted path so a
    /// successful login can return there.
    RedirectToLogin { from: Option<String> },
}

/// Declarative path → access table consumed by one generic dispatch,
/// instead of re-deriving the guard conditions per view.
#[derive(Debug, Default)]
pub struct RouteTable {
    routes: Vec<Route>,
}

impl RouteTable {
    pub fn new() -> Self {
        Self { routes: Vec::new() }
    }

    pub fn route(mut self, path: impl Into<String>, access: RouteAccess) -> Self {
        self.routes.push(Route {
            path: path.into(),
            access,
        });
        self
    }

    /// The mature Xpenly admin console: login is public, the whole
    /// admin area requires the admin role, anything else falls
    /// through to the catch-all.
    pub fn xpenly_admin() -> Self {
        Self::new()
            .route(LOGIN_PATH, RouteAccess::Public)
            .route(HOME_PATH, RouteAccess::admin())
            .route("/admin/users", RouteAccess::admin())
            .route("/admin/income-category", RouteAccess::admin())
            .route("/admin/expense-category", RouteAccess::admin())
            .route("/admin/faq", RouteAccess::admin())
            .route("/admin/feedback", RouteAccess::admin())
            .route("/admin/about-us", RouteAccess::admin())
            .route("/admin/privacy-policy", RouteAccess::admin())
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    fn find(&self, path: &str) -> Option<&Route> {
        self.routes.iter().find(|r| r.path == path)
    }

    /// Resolve one navigation attempt against the current session.
    pub fn resolve(&self, path: &str, snapshot: &SessionSnapshot) -> Navigation {
        if snapshot.loading {
            return Navigation::Loading;
        }

        // The login route inverts the guard: a signed-in user is sent
        // home instead of being shown the login form again.
        if path == LOGIN_PATH {
            return if snapshot.is_authenticated() {
                Navigation::RedirectHome
            } else {
                Navigation::RenderLogin
            };
        }

        match self.find(path) {
            Some(route) => match evaluate_route(snapshot, &route.access, path) {
                GuardDecision::Render => Navigation::Render {
                    path: path.to_string(),
                },
                GuardDecision::Loading => Navigation::Loading,
                GuardDecision::RedirectToLogin { from } => {
                    Navigation::RedirectToLogin { from: Some(from) }
                }
                // A denied role lands on login as well; the guard has
                // already recorded the distinction.
                GuardDecision::Forbidden { from } => {
                    Navigation::RedirectToLogin { from: Some(from) }
                }
            },
            // Catch-all: no 404 view exists.
            None => {
                if snapshot.is_authenticated() {
                    Navigation::RedirectHome
                } else {
                    Navigation::RedirectToLogin { from: None }
                }
            }
        }
    }
}

/// Where a successful login should land: the attempted path the
/// redirect carried, or home.
pub fn post_login_destination(from: Option<&str>) -> String {
    match from {
        Some(path) if !path.trim().is_empty() => path.to_string(),
        _ => HOME_PATH.to_string(),
    }
}
