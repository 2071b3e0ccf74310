//! Outbound request shaping.
//!
//! This module converts a session transcript into the role-tagged turn
//! sequence the generateContent endpoint expects. The transformation is
//! pure: the system instruction always becomes the first turn (tagged as
//! originating from the calling party), and every transcript entry follows
//! in order, tagged `model` for bot entries and `user` otherwise.

use crate::chat::message::ChatMessage;
use crate::types::{Content, DataUri, Part, Role};

/// Map a transcript entry's originator onto a wire role.
pub fn role_for(is_bot: bool) -> Role {
    if is_bot { Role::Model } else { Role::User }
}

/// Recover a transcript entry's originator from a wire role.
pub fn is_bot_for(role: Role) -> bool {
    role == Role::Model
}

/// Build the turn sequence for a completion request.
///
/// The entire transcript is resent every turn; there is no windowing or
/// summarization.
pub fn build_contents(system_instruction: &str, transcript: &[ChatMessage]) -> Vec<Content> {
    let mut contents = Vec::with_capacity(transcript.len() + 1);
    contents.push(Content::user(system_instruction));
    for message in transcript {
        contents.push(Content::new(
            role_for(message.is_bot),
            vec![Part::text(message.content.as_str())],
        ));
    }
    contents
}

/// Build the parts for an image-analysis turn: the fixed instruction
/// followed by the image payload as inline data.
pub fn build_analysis_parts(instruction: &str, image: &DataUri) -> Vec<Part> {
    vec![
        Part::text(instruction),
        Part::inline_data(image.clone().into_blob()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_transcript_yields_only_the_system_turn() {
        let contents = build_contents("You are a trainer.", &[]);
        assert_eq!(contents, vec![Content::user("You are a trainer.")]);
    }

    #[test]
    fn system_turn_is_always_first() {
        let transcript = vec![ChatMessage::bot("greeting"), ChatMessage::user("hello")];
        let contents = build_contents("instruction", &transcript);
        assert_eq!(contents[0], Content::user("instruction"));
        assert_eq!(contents.len(), 3);
    }

    #[test]
    fn transcript_order_is_preserved() {
        let transcript = vec![
            ChatMessage::bot("greeting"),
            ChatMessage::user("I'm a beginner"),
            ChatMessage::bot("What's your primary goal?"),
            ChatMessage::user("weight loss"),
        ];
        let contents = build_contents("instruction", &transcript);

        let texts: Vec<String> = contents.iter().skip(1).map(Content::text).collect();
        assert_eq!(
            texts,
            vec!["greeting", "I'm a beginner", "What's your primary goal?", "weight loss"]
        );
    }

    #[test]
    fn role_mapping_round_trips() {
        let transcript = vec![
            ChatMessage::bot("a"),
            ChatMessage::user("b"),
            ChatMessage::user("c"),
            ChatMessage::bot("d"),
        ];
        let contents = build_contents("instruction", &transcript);

        let recovered: Vec<bool> = contents
            .iter()
            .skip(1)
            .map(|content| is_bot_for(content.role))
            .collect();
        let original: Vec<bool> = transcript.iter().map(|m| m.is_bot).collect();
        assert_eq!(recovered, original);
    }

    #[test]
    fn analysis_parts_carry_instruction_then_payload() {
        let image = DataUri::new("image/jpeg", "AAAA");
        let parts = build_analysis_parts("Assess this photo.", &image);
        assert_eq!(parts.len(), 2);
        assert_eq!(parts[0].as_text(), Some("Assess this photo."));
        match &parts[1] {
            Part::InlineData { inline_data } => {
                assert_eq!(inline_data.mime_type, "image/jpeg");
                assert_eq!(inline_data.data, "AAAA");
            }
            Part::Text { .. } => panic!("Expected InlineData variant"),
        }
    }
}
