//! Error types module
//!
//! Validation failures raised while constructing a `DocumentToVerify` are
//! `DomainError`s. Everything that can come out of a verification attempt is
//! a `VerifyError`; it is the only failure type callers of the use case ever
//! see, so consumers can match on it exhaustively.

/// Validation-time failures. Always recoverable by choosing another file.
#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    #[error("Unsupported file type: {0}. Supported types: application/pdf, image/png, image/jpeg, image/webp")]
    UnsupportedFileType(String),

    #[error("{0}")]
    FileTooLarge(String),

    #[error("Invalid document: {0}")]
    InvalidDocument(String),
}

/// Failures surfaced by a verification attempt.
#[derive(Debug, thiserror::Error)]
pub enum VerifyError {
    /// Local validation rejected the file before any network call.
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// The service rejected the request, or an unexpected failure was wrapped.
    #[error("{message}")]
    VerificationFailed {
        message: String,
        #[source]
        source: Option<anyhow::Error>,
    },

    /// Connectivity failure or a server-side error status.
    #[error("{message}")]
    Network {
        message: String,
        status_code: Option<u16>,
    },

    /// The service answered 429.
    #[error("Rate limit exceeded. Please try again later.")]
    RateLimitExceeded { retry_after_seconds: Option<u64> },
}

impl VerifyError {
    /// Business rejection with a user-facing message and no cause.
    pub fn verification_failed(message: impl Into<String>) -> Self {
        VerifyError::VerificationFailed {
            message: message.into(),
            source: None,
        }
    }

    /// Wrap a failure that does not fit any other kind, keeping it as the cause.
    pub fn unexpected(source: anyhow::Error) -> Self {
        VerifyError::VerificationFailed {
            message: "An unexpected error occurred during verification".to_string(),
            source: Some(source),
        }
    }
}
