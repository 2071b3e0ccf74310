use serde::{Deserialize, Serialize};

use crate::types::{Blob, Part};

/// Role type for a conversation turn.
///
/// The generative-language API recognizes two roles: `user` for turns
/// originating from the calling party and `model` for turns the model
/// produced.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// A turn originating from the calling party.
    User,

    /// A turn produced by the model.
    Model,
}

/// One role-tagged turn in a generateContent request or response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Content {
    /// The role of the turn.
    pub role: Role,

    /// The ordered parts making up the turn.
    pub parts: Vec<Part>,
}

impl Content {
    /// Create a new `Content` with the given role and parts.
    pub fn new(role: Role, parts: Vec<Part>) -> Self {
        Self { role, parts }
    }

    /// Create a user turn holding a single text part.
    pub fn user(text: impl Into<String>) -> Self {
        Self::new(Role::User, vec![Part::text(text)])
    }

    /// Create a model turn holding a single text part.
    pub fn model(text: impl Into<String>) -> Self {
        Self::new(Role::Model, vec![Part::text(text)])
    }

    /// Create a user turn from pre-built parts.
    pub fn user_parts(parts: Vec<Part>) -> Self {
        Self::new(Role::User, parts)
    }

    /// Create a user turn carrying an instruction followed by inline data.
    pub fn user_with_inline_data(text: impl Into<String>, blob: Blob) -> Self {
        Self::new(Role::User, vec![Part::text(text), Part::inline_data(blob)])
    }

    /// Returns the concatenated text of every text part in this turn.
    pub fn text(&self) -> String {
        self.parts
            .iter()
            .filter_map(Part::as_text)
            .collect::<Vec<_>>()
            .join("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, to_value};

    #[test]
    fn user_turn_serialization() {
        let content = Content::user("What's your current fitness level?");
        let json = to_value(&content).unwrap();

        assert_eq!(
            json,
            json!({
                "role": "user",
                "parts": [{ "text": "What's your current fitness level?" }]
            })
        );
    }

    #[test]
    fn model_turn_serialization() {
        let content = Content::model("Beginner is a great place to start.");
        let json = to_value(&content).unwrap();

        assert_eq!(
            json,
            json!({
                "role": "model",
                "parts": [{ "text": "Beginner is a great place to start." }]
            })
        );
    }

    #[test]
    fn inline_data_turn_serialization() {
        let blob = Blob::new("image/jpeg", "SGVsbG8=");
        let content = Content::user_with_inline_data("Describe this photo.", blob);
        let json = to_value(&content).unwrap();

        assert_eq!(
            json,
            json!({
                "role": "user",
                "parts": [
                    { "text": "Describe this photo." },
                    { "inline_data": { "mime_type": "image/jpeg", "data": "SGVsbG8=" } }
                ]
            })
        );
    }

    #[test]
    fn text_concatenates_text_parts() {
        let content = Content::new(
            Role::Model,
            vec![Part::text("Push-ups, "), Part::text("then squats.")],
        );
        assert_eq!(content.text(), "Push-ups, then squats.");
    }

    #[test]
    fn role_deserialization() {
        let role: Role = serde_json::from_str(r#""model""#).unwrap();
        assert_eq!(role, Role::Model);
        let role: Role = serde_json::from_str(r#""user""#).unwrap();
        assert_eq!(role, Role::User);
    }
}
