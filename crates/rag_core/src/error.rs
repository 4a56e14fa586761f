//! Error type for the RAG answer workspace.
//!
//! Parsing an answer is infallible. Errors only come from the edges around it:
//! decoding a backend payload, loading parser config, or a failed backend query.
//! Each carries one of the string constants in [`codes`].

use serde::{Deserialize, Serialize};
use std::fmt;

/// An answer-pipeline failure, tagged with a [`codes`] constant so a chat
/// client can branch on it after it crosses the wire.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AppError {
    pub code: String,
    pub message: String,
    pub details: Option<String>,
    pub retryable: bool,
}

impl AppError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
            retryable: false,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn with_retryable(mut self, retryable: bool) -> Self {
        self.retryable = retryable;
        self
    }

    /// True when `self.code` equals `code`.
    pub fn is(&self, code: &str) -> bool {
        self.code == code
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)?;
        if let Some(details) = self.details.as_deref() {
            write!(f, " ({details})")?;
        }
        Ok(())
    }
}

impl std::error::Error for AppError {}

/// Error codes emitted by this workspace.
pub mod codes {
    pub const ANSWER_DECODE_FAILED: &str = "ANSWER_DECODE_FAILED";
    pub const CONFIG_READ_FAILED: &str = "CONFIG_READ_FAILED";
    pub const CONFIG_DECODE_FAILED: &str = "CONFIG_DECODE_FAILED";
    pub const CONFIG_INVALID: &str = "CONFIG_INVALID";
    pub const BACKEND_QUERY_FAILED: &str = "BACKEND_QUERY_FAILED";
}
