/// Public login route of the admin console.
pub const LOGIN_PATH: &str = "/login";

/// Default landing route after login (the dashboard).
pub const HOME_PATH: &str = "/";

/// Role granting access to the admin area.
pub const ADMIN_ROLE: &str = "admin";
