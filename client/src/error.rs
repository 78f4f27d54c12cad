//! Unified error handling for the client.

use syndic_engine::status::GENERIC_FAILURE;

/// Application error type.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error(transparent)]
    Engine(#[from] syndic_engine::Error),

    #[error("remote rejected request ({status}): {message}")]
    Remote { status: u16, message: String },

    #[error("invalid response body: {0}")]
    InvalidBody(String),
}

impl ClientError {
    /// Message suitable for the shared error surface.
    ///
    /// Never empty: a failure carrying no text degrades to the engine's
    /// generic fallback.
    pub fn display_message(&self) -> String {
        let message = self.to_string();
        if message.trim().is_empty() {
            GENERIC_FAILURE.to_string()
        } else {
            message
        }
    }
}

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;
