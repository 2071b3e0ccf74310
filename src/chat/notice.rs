//! Notification payloads for front ends.
//!
//! The session itself returns typed `Result`s and never renders anything;
//! a front end that surfaces failures as toasts or alerts builds the
//! payload here.

use crate::error::Error;

/// How prominently a notice should be surfaced.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Severity {
    /// Informational.
    Info,

    /// A failure the user should see.
    Error,
}

/// A displayable notification: title, description, severity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    /// Short headline.
    pub title: String,

    /// One-line description.
    pub description: String,

    /// Display severity.
    pub severity: Severity,
}

impl Notice {
    /// Create an informational notice.
    pub fn info(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            severity: Severity::Info,
        }
    }

    /// Build the user-facing notice for a failed operation.
    ///
    /// Credential and validation problems name their cause; everything
    /// else collapses to the generic retry message the trainer has always
    /// shown.
    pub fn from_error(err: &Error) -> Self {
        let description = match err {
            Error::Authentication { .. } => {
                "An API key is required before chatting. Set GEMINI_API_KEY.".to_string()
            }
            Error::Validation { message, .. } => message.clone(),
            _ => "Failed to generate response. Please try again.".to_string(),
        };
        Self {
            title: "Error".to_string(),
            description,
            severity: Severity::Error,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remote_failures_collapse_to_the_retry_message() {
        let notice = Notice::from_error(&Error::rate_limit("quota exceeded", None));
        assert_eq!(notice.title, "Error");
        assert_eq!(
            notice.description,
            "Failed to generate response. Please try again."
        );
        assert_eq!(notice.severity, Severity::Error);
    }

    #[test]
    fn validation_failures_name_their_cause() {
        let notice = Notice::from_error(&Error::validation(
            "image size should be less than 5MB",
            Some("image".to_string()),
        ));
        assert_eq!(notice.description, "image size should be less than 5MB");
    }

    #[test]
    fn credential_failures_point_at_the_key() {
        let notice = Notice::from_error(&Error::authentication("credential not supplied"));
        assert!(notice.description.contains("GEMINI_API_KEY"));
    }
}
