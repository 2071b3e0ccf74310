use serde::{Deserialize, Serialize};

use crate::types::Blob;

/// One part of a conversation turn.
///
/// A part is either plain text or inline binary data (an image payload).
/// On the wire the two shapes are distinguished by their field name, so
/// the enum is untagged.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum Part {
    /// A plain text part.
    Text {
        /// The text content.
        text: String,
    },

    /// An inline binary data part.
    InlineData {
        /// The inline data payload.
        inline_data: Blob,
    },
}

impl Part {
    /// Create a new text part.
    pub fn text(text: impl Into<String>) -> Self {
        Part::Text { text: text.into() }
    }

    /// Create a new inline data part.
    pub fn inline_data(blob: Blob) -> Self {
        Part::InlineData { inline_data: blob }
    }

    /// Returns the text of this part, if it is a text part.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Part::Text { text } => Some(text),
            Part::InlineData { .. } => None,
        }
    }
}

impl From<&str> for Part {
    fn from(text: &str) -> Self {
        Part::text(text)
    }
}

impl From<String> for Part {
    fn from(text: String) -> Self {
        Part::text(text)
    }
}

impl From<Blob> for Part {
    fn from(blob: Blob) -> Self {
        Part::inline_data(blob)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, to_value};

    #[test]
    fn text_part_serialization() {
        let part = Part::text("Hello");
        assert_eq!(to_value(&part).unwrap(), json!({ "text": "Hello" }));
    }

    #[test]
    fn inline_data_part_serialization() {
        let part = Part::inline_data(Blob::new("image/png", "AAAA"));
        assert_eq!(
            to_value(&part).unwrap(),
            json!({ "inline_data": { "mime_type": "image/png", "data": "AAAA" } })
        );
    }

    #[test]
    fn untagged_deserialization_picks_the_right_variant() {
        let part: Part = serde_json::from_value(json!({ "text": "hi" })).unwrap();
        assert_eq!(part.as_text(), Some("hi"));

        let part: Part = serde_json::from_value(
            json!({ "inline_data": { "mime_type": "image/webp", "data": "BBBB" } }),
        )
        .unwrap();
        assert!(part.as_text().is_none());
        match part {
            Part::InlineData { inline_data } => {
                assert_eq!(inline_data.mime_type, "image/webp");
                assert_eq!(inline_data.data, "BBBB");
            }
            Part::Text { .. } => panic!("Expected InlineData variant"),
        }
    }
}
