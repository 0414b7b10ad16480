//! Error types and handling module.
//!
//! Defines all application-specific error types and conversions.

use alloy::primitives::utils::UnitsError;
use thiserror::Error;

/// Application-wide error type.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration-related errors.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error response returned by the Ethereum node.
    #[error("Ethereum RPC error: {0}")]
    Rpc(String),

    /// Transport errors.
    #[error("Transport error: {0}")]
    Transport(String),

    /// Block explorer API errors.
    #[error("Block explorer error: {0}")]
    Explorer(String),

    /// Transaction hash that is not 32 bytes of hex.
    #[error("Invalid transaction hash: {0}")]
    InvalidTransactionHash(String),

    /// The node returned no block for the requested number.
    #[error("Block {0} not found")]
    BlockNotFound(u64),

    /// Parse error.
    #[error("Parse error: {0}")]
    Parse(String),
}

impl From<alloy::transports::TransportError> for AppError {
    fn from(err: alloy::transports::TransportError) -> Self {
        match err.as_error_resp() {
            Some(payload) => AppError::Rpc(payload.message.to_string()),
            None => AppError::Transport(err.to_string()),
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            AppError::Parse(err.to_string())
        } else {
            AppError::Transport(err.to_string())
        }
    }
}

impl From<UnitsError> for AppError {
    fn from(err: UnitsError) -> Self {
        AppError::Parse(err.to_string())
    }
}

/// Result type alias using AppError.
pub type Result<T> = std::result::Result<T, AppError>;
