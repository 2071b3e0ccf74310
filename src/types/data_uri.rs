use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use base64::Engine;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::types::Blob;

/// Supported image media types
#[derive(Debug, Copy, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum ImageMediaType {
    #[serde(rename = "image/jpeg")]
    Jpeg,

    #[serde(rename = "image/png")]
    Png,

    #[serde(rename = "image/gif")]
    Gif,

    #[serde(rename = "image/webp")]
    Webp,
}

impl ImageMediaType {
    /// The IANA media type string for this image type.
    pub fn as_str(&self) -> &'static str {
        match self {
            ImageMediaType::Jpeg => "image/jpeg",
            ImageMediaType::Png => "image/png",
            ImageMediaType::Gif => "image/gif",
            ImageMediaType::Webp => "image/webp",
        }
    }

    /// Determine the media type from a file extension, if recognized.
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension.to_ascii_lowercase().as_str() {
            "jpg" | "jpeg" => Some(ImageMediaType::Jpeg),
            "png" => Some(ImageMediaType::Png),
            "gif" => Some(ImageMediaType::Gif),
            "webp" => Some(ImageMediaType::Webp),
            _ => None,
        }
    }
}

impl fmt::Display for ImageMediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An image encoded as a base64 data URI.
///
/// This is the handoff format between an upload front end and the vision
/// endpoint: `data:<mime>;base64,<payload>`. Only the payload after the
/// comma separator is sent to the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DataUri {
    /// The media type named in the URI header.
    pub mime_type: String,

    /// The base64 payload after the comma separator.
    pub data: String,
}

impl DataUri {
    /// Create a new `DataUri` from a media type and a base64 payload.
    pub fn new(mime_type: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            mime_type: mime_type.into(),
            data: data.into(),
        }
    }

    /// Parse a `data:<mime>;base64,<payload>` string.
    pub fn parse(uri: &str) -> Result<Self> {
        let rest = uri
            .strip_prefix("data:")
            .ok_or_else(|| Error::encoding("data URI must start with \"data:\"", None))?;
        let (header, payload) = rest
            .split_once(',')
            .ok_or_else(|| Error::encoding("data URI has no comma separator", None))?;
        let mime_type = header
            .strip_suffix(";base64")
            .ok_or_else(|| Error::encoding("data URI payload must be base64-encoded", None))?;
        if mime_type.is_empty() {
            return Err(Error::encoding("data URI names no media type", None));
        }
        Ok(Self::new(mime_type, payload))
    }

    /// Create a `DataUri` from an image file on disk.
    ///
    /// The media type is determined from the file extension; the file
    /// contents are base64-encoded.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let media_type = path
            .extension()
            .and_then(|ext| ext.to_str())
            .and_then(ImageMediaType::from_extension)
            .ok_or_else(|| {
                Error::validation(
                    "unsupported file extension (must be jpeg, png, gif, or webp)",
                    Some("path".to_string()),
                )
            })?;

        let mut file = File::open(path).map_err(|err| Error::io("failed to open image", err))?;
        let mut buffer = Vec::new();
        file.read_to_end(&mut buffer)
            .map_err(|err| Error::io("failed to read image", err))?;

        let data = base64::engine::general_purpose::STANDARD.encode(&buffer);
        Ok(Self::new(media_type.as_str(), data))
    }

    /// Returns true if the media type begins with "image/".
    pub fn is_image(&self) -> bool {
        self.mime_type.starts_with("image/")
    }

    /// The decoded payload size in bytes, computed from the base64 length.
    pub fn payload_len(&self) -> usize {
        let trimmed = self.data.trim_end_matches('=');
        trimmed.len() * 3 / 4
    }

    /// Convert into the inline-data payload sent to the API.
    pub fn into_blob(self) -> Blob {
        Blob::new(self.mime_type, self.data)
    }
}

impl fmt::Display for DataUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "data:{};base64,{}", self.mime_type, self.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_roundtrip() {
        let uri = DataUri::parse("data:image/png;base64,SGVsbG8=").unwrap();
        assert_eq!(uri.mime_type, "image/png");
        assert_eq!(uri.data, "SGVsbG8=");
        assert!(uri.is_image());
        assert_eq!(uri.to_string(), "data:image/png;base64,SGVsbG8=");
    }

    #[test]
    fn parse_rejects_malformed_uris() {
        assert!(DataUri::parse("image/png;base64,AAAA").is_err());
        assert!(DataUri::parse("data:image/png;base64").is_err());
        assert!(DataUri::parse("data:image/png,AAAA").is_err());
        assert!(DataUri::parse("data:;base64,AAAA").is_err());
    }

    #[test]
    fn payload_len_accounts_for_padding() {
        // "Hello" encodes to "SGVsbG8=" with one padding byte.
        let uri = DataUri::new("image/png", "SGVsbG8=");
        assert_eq!(uri.payload_len(), 5);
    }

    #[test]
    fn into_blob_keeps_only_the_payload() {
        let uri = DataUri::parse("data:image/jpeg;base64,AAAA").unwrap();
        let blob = uri.into_blob();
        assert_eq!(blob.mime_type, "image/jpeg");
        assert_eq!(blob.data, "AAAA");
    }

    #[test]
    fn media_type_from_extension() {
        assert_eq!(
            ImageMediaType::from_extension("JPG"),
            Some(ImageMediaType::Jpeg)
        );
        assert_eq!(
            ImageMediaType::from_extension("webp"),
            Some(ImageMediaType::Webp)
        );
        assert_eq!(ImageMediaType::from_extension("pdf"), None);
    }

    #[test]
    fn non_image_media_type() {
        let uri = DataUri::parse("data:application/pdf;base64,AAAA").unwrap();
        assert!(!uri.is_image());
    }
}
