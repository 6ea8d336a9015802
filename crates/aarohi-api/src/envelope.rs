//! The uniform `{status, data, message}` response wrapper.

use crate::error::{FetchError, FetchResult};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Wrapper every backend endpoint responds with.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope<T> {
    /// `"success"` on success; anything else is a failure.
    pub status: String,
    /// The endpoint's payload.
    pub data: T,
    /// Human-readable note from the backend.
    pub message: String,
}

impl<T> Envelope<T> {
    /// Whether the backend reported success.
    pub fn is_success(&self) -> bool {
        self.status == "success"
    }
}

/// Decodes a response body into the payload type.
///
/// The envelope is first decoded with an opaque `data` field so that a
/// failure envelope (whose `data` may be null) still yields the backend's
/// message rather than a decode error.
pub fn unwrap_envelope<T: DeserializeOwned>(body: &str) -> FetchResult<T> {
    let raw: Envelope<serde_json::Value> = serde_json::from_str(body)?;
    if !raw.is_success() {
        return Err(FetchError::Envelope {
            message: raw.message,
        });
    }
    Ok(serde_json::from_value(raw.data)?)
}
