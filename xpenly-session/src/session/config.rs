use std::sync::LazyLock;

/// Store key holding the raw credential token.
pub static SESSION_TOKEN_KEY: LazyLock<String> = LazyLock::new(|| {
    std::env::var("SESSION_TOKEN_KEY")
        .ok()
        .unwrap_or("token".to_string())
});

/// Store key holding the JSON-serialized user record.
pub static SESSION_USER_KEY: LazyLock<String> = LazyLock::new(|| {
    std::env::var("SESSION_USER_KEY")
        .ok()
        .unwrap_or("user".to_string())
});
