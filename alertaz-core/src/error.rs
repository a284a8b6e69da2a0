/// Error types for the Alertaz core library
use thiserror::Error;

/// Main error type for Alertaz operations
#[derive(Error, Debug)]
pub enum AlertazError {
    /// HTTP request failed before a response arrived
    #[cfg(feature = "api")]
    #[error("HTTP request failed: {0}")]
    HttpRequest(#[from] reqwest::Error),

    /// The backend answered with a non-success status
    #[error("API returned status {status}: {message}")]
    ApiStatus { status: u16, message: String },

    /// Failed to decode a response body
    #[error("Failed to parse response: {0}")]
    ResponseParse(String),

    /// Durable storage could not be reached or refused the write
    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),

    /// A value could not be serialized for storage
    #[error("Failed to serialize value for key {key}: {source}")]
    Serialize {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// Route locale segment is not in the allow-list
    #[error("Unsupported locale: {0}")]
    UnsupportedLocale(String),

    /// The chat widget rejected or failed a command
    #[error("Widget command failed: {0}")]
    Widget(String),

    /// Invalid configuration value
    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Type alias for Results using AlertazError
pub type Result<T> = std::result::Result<T, AlertazError>;
