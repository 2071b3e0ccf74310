use serde::{Deserialize, Serialize};

/// Inline binary data for a conversation turn.
///
/// The data field carries the raw base64 payload, without any data-URI
/// prefix.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Blob {
    /// The IANA media type of the payload (e.g. "image/jpeg").
    pub mime_type: String,

    /// The base64-encoded payload.
    pub data: String,
}

impl Blob {
    /// Create a new `Blob` from a media type and a base64 payload.
    pub fn new(mime_type: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            mime_type: mime_type.into(),
            data: data.into(),
        }
    }
}
