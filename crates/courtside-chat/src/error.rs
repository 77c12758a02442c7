//! Error types for conversation orchestration.

use courtside_core::error::CourtsideError;

/// Errors from the conversation engine.
///
/// Validation errors are returned synchronously from `handle_turn` before
/// any event is emitted or anything is persisted. Failures after the stream
/// starts surface as terminal `Error` events instead.
#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    #[error("message cannot be empty")]
    EmptyMessage,
    #[error("message exceeds maximum length of {0} characters")]
    MessageTooLong(usize),
    #[error("user id cannot be empty")]
    EmptyUserId,
    #[error("storage error: {0}")]
    Storage(String),
}

impl ChatError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ChatError::EmptyMessage | ChatError::MessageTooLong(_) | ChatError::EmptyUserId => {
                ErrorKind::MalformedRequest
            }
            ChatError::Storage(_) => ErrorKind::StoreWriteFailure,
        }
    }
}

impl From<CourtsideError> for ChatError {
    fn from(err: CourtsideError) -> Self {
        ChatError::Storage(err.to_string())
    }
}

/// Classified failure cause, used for logging and HTTP mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    ProviderUnavailable,
    ProviderAuthError,
    ProviderRateLimited,
    FeedUnavailable,
    StoreWriteFailure,
    MalformedRequest,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            ChatError::EmptyMessage.to_string(),
            "message cannot be empty"
        );
        assert_eq!(
            ChatError::MessageTooLong(2000).to_string(),
            "message exceeds maximum length of 2000 characters"
        );
        assert_eq!(
            ChatError::EmptyUserId.to_string(),
            "user id cannot be empty"
        );
    }

    #[test]
    fn test_validation_errors_are_malformed_requests() {
        assert_eq!(ChatError::EmptyMessage.kind(), ErrorKind::MalformedRequest);
        assert_eq!(
            ChatError::MessageTooLong(10).kind(),
            ErrorKind::MalformedRequest
        );
        assert_eq!(ChatError::EmptyUserId.kind(), ErrorKind::MalformedRequest);
    }

    #[test]
    fn test_storage_error_conversion() {
        let err: ChatError = CourtsideError::Storage("disk full".to_string()).into();
        assert_eq!(err.kind(), ErrorKind::StoreWriteFailure);
        assert!(err.to_string().contains("disk full"));
    }
}
