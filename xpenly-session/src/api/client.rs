use url::Url;

use crate::api::errors::ApiError;
use crate::api::types::{LoginRequest, LoginResponse};

const LOGIN_ENDPOINT: &str = "/api/admin/login";
const MIN_PASSWORD_LENGTH: usize = 6;

/// HTTP client for the Xpenly backend's admin login exchange.
///
/// The session manager never talks to the network; callers run the
/// exchange here and feed the resulting `{token, user}` pair into
/// `SessionManager::login`.
pub struct AdminApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl AdminApiClient {
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        // Parse up front so a bad base URL fails at construction, not
        // at the first login attempt.
        Url::parse(base_url).map_err(|e| ApiError::Config(format!("invalid base URL: {e}")))?;
        Ok(Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Build a client from `XPENLY_API_BASE_URL`.
    pub fn from_env() -> Result<Self, ApiError> {
        let base_url = std::env::var("XPENLY_API_BASE_URL")
            .map_err(|_| ApiError::Config("XPENLY_API_BASE_URL must be set".to_string()))?;
        Self::new(&base_url)
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Exchange credentials for a `{token, user}` pair.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, ApiError> {
        validate_credentials(email, password)?;

        let response = self
            .http
            .post(self.endpoint(LOGIN_ENDPOINT))
            .json(&LoginRequest {
                email: email.trim().to_string(),
                password: password.to_string(),
            })
            .send()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            tracing::debug!("Login request rejected with status {}", status);
            return Err(ApiError::Status(status.as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;

        serde_json::from_str(&body)
            .map_err(|e| ApiError::Serde(format!("Failed to deserialize response body: {e}")))
    }
}

/// Client-side validation mirroring the admin login form: blank
/// fields, a plausible email shape, and a minimum password length
/// are all rejected before any request is issued.
fn validate_credentials(email: &str, password: &str) -> Result<(), ApiError> {
    if email.trim().is_empty() || password.trim().is_empty() {
        return Err(ApiError::InvalidCredentials(
            "Email and password are required".to_string(),
        ));
    }

    if !is_plausible_email(email.trim()) {
        return Err(ApiError::InvalidCredentials(
            "Please enter a valid email address".to_string(),
        ));
    }

    if password.len() < MIN_PASSWORD_LENGTH {
        return Err(ApiError::InvalidCredentials(format!(
            "Password must be at least {MIN_PASSWORD_LENGTH} characters"
        )));
    }

    Ok(())
}

/// local@domain.tld with no whitespace; a shape check, not RFC 5322.
fn is_plausible_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_invalid_base_url() {
        // Given a base URL that does not parse
        let client = AdminApiClient::new("not a url");

        // Then construction fails with a config error
        assert!(matches!(client, Err(ApiError::Config(_))));
    }

    #[test]
    fn test_endpoint_joins_without_double_slash() {
        // Given base URLs with and without a trailing slash
        for base in ["https://api.xpenly.com", "https://api.xpenly.com/"] {
            let client = AdminApiClient::new(base).unwrap();

            // Then the login endpoint joins cleanly
            assert_eq!(
                client.endpoint("/api/admin/login"),
                "https://api.xpenly.com/api/admin/login"
            );
        }
    }

    #[test]
    fn test_validate_rejects_blank_fields() {
        assert!(matches!(
            validate_credentials("", "secret123"),
            Err(ApiError::InvalidCredentials(_))
        ));
        assert!(matches!(
            validate_credentials("admin@xpenly.com", ""),
            Err(ApiError::InvalidCredentials(_))
        ));
        assert!(matches!(
            validate_credentials("   ", "   "),
            Err(ApiError::InvalidCredentials(_))
        ));
    }

    #[test]
    fn test_validate_rejects_malformed_email() {
        for email in [
            "plain",
            "no-at.example.com",
            "two@@example.com",
            "@example.com",
            "user@nodot",
            "user@.com",
            "user@domain.",
            "spaced user@example.com",
        ] {
            assert!(
                matches!(
                    validate_credentials(email, "secret123"),
                    Err(ApiError::InvalidCredentials(_))
                ),
                "email: {email}"
            );
        }
    }

    #[test]
    fn test_validate_rejects_short_password() {
        assert!(matches!(
            validate_credentials("admin@xpenly.com", "12345"),
            Err(ApiError::InvalidCredentials(_))
        ));
    }

    #[test]
    fn test_validate_accepts_plausible_credentials() {
        assert!(validate_credentials("admin@xpenly.com", "secret123").is_ok());
        assert!(validate_credentials("a@b.co", "123456").is_ok());
    }

    #[tokio::test]
    async fn test_login_validates_before_any_request() {
        // Given a client pointed at an unroutable host
        let client = AdminApiClient::new("http://localhost:1").unwrap();

        // When logging in with invalid credentials
        let result = client.login("not-an-email", "secret123").await;

        // Then the failure is a validation error, proving no request
        // was attempted against the dead endpoint
        assert!(matches!(result, Err(ApiError::InvalidCredentials(_))));
    }
}
