use serde::{Deserialize, Serialize};

/// One entry in a session transcript.
///
/// Entries are immutable once appended and the transcript is append-only;
/// ordering is chronological.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatMessage {
    /// The text of the entry.
    pub content: String,

    /// True if the entry was produced by the model (or synthesized on its
    /// behalf), false if it came from the user.
    pub is_bot: bool,
}

impl ChatMessage {
    /// Create a new user entry.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            is_bot: false,
        }
    }

    /// Create a new bot entry.
    pub fn bot(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            is_bot: true,
        }
    }
}
