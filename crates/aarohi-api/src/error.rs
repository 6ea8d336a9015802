//! Error types for backend API operations.

use thiserror::Error;

/// Errors a single fetch attempt can produce.
///
/// Pages map every variant uniformly to their "failed to load" render state;
/// the distinction exists for logs, not for the user.
#[derive(Error, Debug)]
pub enum FetchError {
    /// The request never produced a response.
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-success HTTP status.
    #[error("server returned HTTP {status}")]
    Status {
        /// The HTTP status code.
        status: u16,
    },

    /// The envelope arrived but reported a non-success status.
    #[error("backend reported failure: {message}")]
    Envelope {
        /// The backend's message field.
        message: String,
    },

    /// The response body did not decode to the expected shape.
    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Result type for fetch operations.
pub type FetchResult<T> = Result<T, FetchError>;
