//! Tool outcome type.
//!
//! Every tool answers with text. Upstream failures are folded into the same
//! shape with an `Error: ` prefix so the calling agent can read them.

use crate::error::{AppError, Result};

/// Message used when an error renders to an empty string.
pub const FALLBACK_ERROR_MESSAGE: &str = "error without message";

/// Result of a single tool invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolOutcome {
    /// Formatted answer, including domain not-found texts.
    Text(String),
    /// Upstream failure message, without the `Error: ` prefix.
    Error(String),
}

impl ToolOutcome {
    /// Build an error outcome, substituting a fallback for empty messages.
    pub fn failure(message: impl Into<String>) -> Self {
        let message = message.into();
        if message.trim().is_empty() {
            ToolOutcome::Error(FALLBACK_ERROR_MESSAGE.to_string())
        } else {
            ToolOutcome::Error(message)
        }
    }

    /// Whether this outcome carries an upstream failure.
    pub fn is_error(&self) -> bool {
        matches!(self, ToolOutcome::Error(_))
    }

    /// Render the text returned to the caller.
    pub fn into_text(self) -> String {
        match self {
            ToolOutcome::Text(text) => text,
            ToolOutcome::Error(message) => format!("Error: {message}"),
        }
    }
}

impl From<AppError> for ToolOutcome {
    fn from(err: AppError) -> Self {
        tracing::warn!(error = %err, "Tool call failed upstream");
        ToolOutcome::failure(err.to_string())
    }
}

impl From<Result<String>> for ToolOutcome {
    fn from(result: Result<String>) -> Self {
        match result {
            Ok(text) => ToolOutcome::Text(text),
            Err(err) => err.into(),
        }
    }
}
