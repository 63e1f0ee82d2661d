//! Errors - validation failures and error classification.

use thiserror::Error;

/// ErrorKind classifies failures for whoever maps them to a response.
///
/// - Client: bad input (invalid id/status, duplicate send, unknown order).
///   Retrying the same request cannot succeed.
/// - Infrastructure: the storage collaborator failed. Retry policy, if any,
///   belongs to the caller or the store; the core never retries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Client,
    Infrastructure,
}

impl ErrorKind {
    pub fn is_retryable(self) -> bool {
        matches!(self, ErrorKind::Infrastructure)
    }
}

/// An entity invariant was violated.
///
/// The message is shown to API clients verbatim, so keep it stable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field}: {message}")]
pub struct ValidationError {
    field: &'static str,
    message: String,
}

impl ValidationError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }

    /// Required field missing (zero id, empty string).
    pub fn blank(field: &'static str) -> Self {
        Self::new(field, "cannot be blank")
    }

    pub fn field(&self) -> &'static str {
        self.field
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}
