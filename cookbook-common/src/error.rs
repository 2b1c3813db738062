//! Common error types for the cookbook controllers

use thiserror::Error;

/// Common result type for cookbook operations
pub type Result<T> = std::result::Result<T, Error>;

/// Common error types across the page controllers
#[derive(Error, Debug)]
pub enum Error {
    /// Storage operation error (wraps sqlx::Error)
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// I/O operation error (wraps std::io::Error)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parse or serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Non-success HTTP status from the origin
    #[error("HTTP {status} fetching {url}")]
    Http { url: String, status: u16 },

    /// Network failure before a response arrived
    #[error("Transport error: {0}")]
    Transport(String),

    /// JSON parsed but did not have the expected structure
    #[error("Invalid shape: {0}")]
    InvalidShape(String),

    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid user input or request parameter
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        match e.status() {
            Some(status) => Error::Http {
                url: e.url().map(|u| u.to_string()).unwrap_or_default(),
                status: status.as_u16(),
            },
            None => Error::Transport(e.to_string()),
        }
    }
}
