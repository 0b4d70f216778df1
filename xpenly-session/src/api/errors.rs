use thiserror::Error;

#[derive(Debug, Error, Clone)]
pub enum ApiError {
    #[error("API client configuration error: {0}")]
    Config(String),

    /// Credentials rejected client-side, before any request is made.
    #[error("Invalid credentials: {0}")]
    InvalidCredentials(String),

    #[error("Request error: {0}")]
    Request(String),

    #[error("Login request failed with status {0}")]
    Status(u16),

    #[error("Json conversion(Serde) error: {0}")]
    Serde(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_display() {
        // Given a Status error
        let error = ApiError::Status(401);

        // When converting to a string
        let error_string = error.to_string();

        // Then it should carry the status code
        assert_eq!(error_string, "Login request failed with status 401");
    }

    #[test]
    fn test_error_is_sync_and_send() {
        fn assert_sync_send<T: Sync + Send>() {}
        assert_sync_send::<ApiError>();
    }
}
