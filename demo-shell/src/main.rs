//! Scripted walk through the admin console's session lifecycle:
//! hydrate, navigate while anonymous, log in, navigate as admin,
//! log out. Run with `SESSION_STORE_TYPE=file SESSION_STORE_PATH=...`
//! to watch a session survive restarts.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use xpenly_session::{
    AdminApiClient, AuthUser, HydrationToken, Navigation, RouteTable, SessionManager,
    post_login_destination,
};

fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "xpenly_session=debug,demo_shell=debug,info".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn show(table: &RouteTable, manager: &SessionManager, path: &str) -> Navigation {
    let nav = table.resolve(path, &manager.snapshot());
    tracing::info!("navigate {path} -> {nav:?}");
    nav
}

/// Exchange credentials with the real backend when one is configured,
/// otherwise fall back to a canned pair so the walk works offline.
async fn obtain_credentials() -> (String, AuthUser) {
    match AdminApiClient::from_env() {
        Ok(client) => {
            let email = std::env::var("XPENLY_ADMIN_EMAIL")
                .unwrap_or_else(|_| "admin@xpenly.com".to_string());
            let password =
                std::env::var("XPENLY_ADMIN_PASSWORD").unwrap_or_else(|_| "secret123".to_string());
            match client.login(&email, &password).await {
                Ok(response) => return (response.token, response.user),
                Err(e) => tracing::warn!("Backend login failed, using demo session: {}", e),
            }
        }
        Err(e) => tracing::info!("No backend configured ({}), using demo session", e),
    }

    let mut user = AuthUser::new("demo-admin", "admin");
    user.name = Some("Demo Admin".to_string());
    user.email = Some("admin@xpenly.com".to_string());
    ("demo-token".to_string(), user)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    init_tracing();

    let mut manager = SessionManager::from_env()?;
    let table = RouteTable::xpenly_admin();

    // Before hydration everything holds at the loading gate.
    show(&table, &manager, "/admin/users");

    let outcome = manager.hydrate(&HydrationToken::new()).await;
    tracing::info!("hydration outcome: {outcome:?}");

    // Anonymous walk: protected pages bounce to login.
    let attempted = match show(&table, &manager, "/admin/users") {
        Navigation::RedirectToLogin { from } => from,
        _ => None,
    };
    show(&table, &manager, "/login");

    if !manager.is_authenticated() {
        let (token, user) = obtain_credentials().await;
        manager.login(&token, user).await?;
        tracing::info!(
            "logged in, returning to {}",
            post_login_destination(attempted.as_deref())
        );
    }

    // Admin walk: the whole console is reachable, login bounces home.
    for path in [
        "/",
        "/admin/users",
        "/admin/income-category",
        "/admin/expense-category",
        "/admin/faq",
        "/admin/feedback",
        "/admin/about-us",
        "/admin/privacy-policy",
        "/login",
        "/no-such-page",
    ] {
        show(&table, &manager, path);
    }

    manager.logout().await;
    tracing::info!("logged out");
    show(&table, &manager, "/");

    Ok(())
}
