//! Image intake and validation.
//!
//! The vision client performs no validation of its own; everything an
//! upload front end would enforce (supported media type, size cap) is
//! enforced here, before any network call.

use std::path::Path;

use crate::error::{Error, Result};
use crate::types::DataUri;

/// Maximum accepted image payload: 5 MiB.
pub const MAX_IMAGE_BYTES: usize = 5 * 1024 * 1024;

/// Load an image file and encode it for analysis.
///
/// Fails with a validation error if the extension does not map to a
/// supported image media type or if the decoded payload exceeds
/// [`MAX_IMAGE_BYTES`]. Oversized or non-image input never reaches the
/// network.
pub fn load_image<P: AsRef<Path>>(path: P) -> Result<DataUri> {
    let uri = DataUri::from_path(path)?;
    validate(&uri)?;
    Ok(uri)
}

/// Validate an already-encoded image.
pub fn validate(uri: &DataUri) -> Result<()> {
    if !uri.is_image() {
        return Err(Error::validation(
            format!("unsupported media type: {}", uri.mime_type),
            Some("image".to_string()),
        ));
    }
    if uri.payload_len() > MAX_IMAGE_BYTES {
        return Err(Error::validation(
            "Image size should be less than 5MB",
            Some("image".to_string()),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_a_small_image() {
        let uri = DataUri::new("image/png", "AAAA");
        assert!(validate(&uri).is_ok());
    }

    #[test]
    fn rejects_non_image_media_types() {
        let uri = DataUri::new("application/pdf", "AAAA");
        let err = validate(&uri).unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn rejects_oversized_payloads() {
        // 6 MiB of payload encodes to 8 MiB of base64.
        let data = "A".repeat(6 * 1024 * 1024 * 4 / 3);
        let uri = DataUri::new("image/jpeg", data);
        let err = validate(&uri).unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn boundary_payload_is_accepted() {
        let data = "A".repeat(MAX_IMAGE_BYTES * 4 / 3);
        let uri = DataUri::new("image/jpeg", data);
        assert!(validate(&uri).is_ok());
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = load_image("definitely/not/here.png").unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }

    #[test]
    fn unsupported_extension_is_a_validation_error() {
        let err = load_image("notes.txt").unwrap_err();
        assert!(err.is_validation());
    }
}
