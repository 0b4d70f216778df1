use thiserror::Error;

use crate::storage::StorageError;

#[derive(Debug, Error, Clone)]
pub enum SessionError {
    /// Login input failed validation before any I/O was attempted.
    #[error("Invalid login data: {0}")]
    InvalidLogin(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("User record parse error: {0}")]
    Parse(String),
}

impl From<StorageError> for SessionError {
    fn from(err: StorageError) -> Self {
        Self::Storage(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_login_display() {
        // Given an InvalidLogin error
        let error = SessionError::InvalidLogin("token and user id are required".to_string());

        // When converting to a string
        let error_string = error.to_string();

        // Then it should format correctly
        assert_eq!(
            error_string,
            "Invalid login data: token and user id are required"
        );
    }

    #[test]
    fn test_from_storage_error() {
        // Given a StorageError
        let storage_error = StorageError::Storage("disk full".to_string());

        // When converting to SessionError
        let session_error = SessionError::from(storage_error);

        // Then it should be a Storage variant carrying the message
        match session_error {
            SessionError::Storage(msg) => assert!(msg.contains("disk full")),
            _ => panic!("Expected Storage variant"),
        }
    }

    #[test]
    fn test_error_is_sync_and_send() {
        fn assert_sync_send<T: Sync + Send>() {}
        assert_sync_send::<SessionError>();
    }
}
