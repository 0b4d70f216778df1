use serde::{Deserialize, Serialize};

use crate::session::AuthUser;

#[derive(Debug, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Credential exchange result: the backend answers a successful
/// login with the token/user pair the session manager consumes.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: AuthUser,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_response_deserialization() {
        // Given a backend login response body
        let body = r#"{
            "token": "tok-1",
            "user": {"id": "u1", "role": "admin", "name": "Asha", "email": "asha@example.com"}
        }"#;

        // When deserializing it
        let response: LoginResponse = serde_json::from_str(body).unwrap();

        // Then the pair is ready to hand to the session manager
        assert_eq!(response.token, "tok-1");
        assert_eq!(response.user.id, "u1");
        assert_eq!(response.user.role, "admin");
    }

    #[test]
    fn test_login_response_tolerates_extra_fields() {
        // Backends add fields over time; the client ignores them.
        let body = r#"{"token": "t", "user": {"id": "u1"}, "message": "ok"}"#;
        let response: LoginResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.user.role, "");
    }

    #[test]
    fn test_login_response_requires_token_and_user() {
        assert!(serde_json::from_str::<LoginResponse>(r#"{"user": {"id": "u1"}}"#).is_err());
        assert!(serde_json::from_str::<LoginResponse>(r#"{"token": "t"}"#).is_err());
    }

    #[test]
    fn test_login_request_serialization() {
        // Given a login request
        let request = LoginRequest {
            email: "admin@xpenly.com".to_string(),
            password: "secret123".to_string(),
        };

        // When serializing for the wire
        let json = serde_json::to_string(&request).unwrap();

        // Then it matches the backend's expected shape
        assert_eq!(
            json,
            r#"{"email":"admin@xpenly.com","password":"secret123"}"#
        );
    }
}
