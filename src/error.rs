use thiserror::Error;

/// Result alias used across the console library.
pub type Result<T> = std::result::Result<T, ConsoleError>;

/// Error types that can occur while talking to the AWS management APIs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConsoleError {
    /// Missing or unusable credentials. Fatal: no API call can be made.
    #[error("Configuration error: {0}")]
    Configuration(String),
    /// A mutation was requested without a target region
    #[error("No region was specified")]
    MissingRegion,
    /// Request parameters the SDK refused to build
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
    /// Errors returned by the AWS service or transport
    #[error("{operation} failed: {message}")]
    Api { operation: String, message: String },
}

impl ConsoleError {
    pub fn api(operation: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Api {
            operation: operation.into(),
            message: message.into(),
        }
    }

    /// True for errors that block every API call until the process restarts.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::Configuration(_))
    }
}
