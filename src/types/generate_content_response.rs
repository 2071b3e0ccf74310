use serde::{Deserialize, Serialize};

use crate::types::Content;

/// One proposed response within a generateContent reply envelope.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    /// The content of the candidate.
    pub content: Option<Content>,

    /// Why generation stopped, when the API reports it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub finish_reason: Option<String>,
}

/// The body of a successful generateContent response.
///
/// Unknown envelope fields (safety ratings, usage metadata) are ignored on
/// deserialization; the success path this crate consumes is
/// `candidates[0].content.parts[0].text`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GenerateContentResponse {
    /// The model's proposed responses. The API returns at least one on
    /// success; an empty or absent list is a malformed response.
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

impl GenerateContentResponse {
    /// Returns the text of the first candidate's first text part, if the
    /// response carries one.
    pub fn first_text(&self) -> Option<&str> {
        self.candidates
            .first()
            .and_then(|candidate| candidate.content.as_ref())
            .and_then(|content| content.parts.iter().find_map(|part| part.as_text()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn first_text_follows_the_success_path() {
        let response: GenerateContentResponse = serde_json::from_value(json!({
            "candidates": [
                {
                    "content": {
                        "role": "model",
                        "parts": [{ "text": "Start with three sets of ten squats." }]
                    },
                    "finishReason": "STOP"
                }
            ]
        }))
        .unwrap();

        assert_eq!(
            response.first_text(),
            Some("Start with three sets of ten squats.")
        );
    }

    #[test]
    fn unknown_envelope_fields_are_ignored() {
        let response: GenerateContentResponse = serde_json::from_value(json!({
            "candidates": [
                {
                    "content": { "role": "model", "parts": [{ "text": "ok" }] },
                    "safetyRatings": []
                }
            ],
            "usageMetadata": { "totalTokenCount": 42 }
        }))
        .unwrap();
        assert_eq!(response.first_text(), Some("ok"));
    }

    #[test]
    fn missing_candidates_yield_no_text() {
        let response: GenerateContentResponse = serde_json::from_value(json!({})).unwrap();
        assert_eq!(response.first_text(), None);

        let response: GenerateContentResponse =
            serde_json::from_value(json!({ "candidates": [] })).unwrap();
        assert_eq!(response.first_text(), None);
    }

    #[test]
    fn candidate_without_content_yields_no_text() {
        let response: GenerateContentResponse = serde_json::from_value(json!({
            "candidates": [{ "content": null, "finishReason": "SAFETY" }]
        }))
        .unwrap();
        assert_eq!(response.first_text(), None);
    }
}
