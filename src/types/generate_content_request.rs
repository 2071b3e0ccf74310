use serde::{Deserialize, Serialize};

use crate::types::{Content, GenerationConfig};

/// The body of a generateContent request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    /// The ordered conversation turns.
    pub contents: Vec<Content>,

    /// Sampling parameters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GenerationConfig>,
}

impl GenerateContentRequest {
    /// Create a new request from pre-built turns.
    pub fn new(contents: Vec<Content>) -> Self {
        Self {
            contents,
            generation_config: None,
        }
    }

    /// Attach sampling parameters to the request.
    pub fn with_generation_config(mut self, config: GenerationConfig) -> Self {
        self.generation_config = Some(config);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, to_value};

    #[test]
    fn request_serialization() {
        let request = GenerateContentRequest::new(vec![
            Content::user("You are a trainer."),
            Content::user("hello"),
        ])
        .with_generation_config(GenerationConfig::default());
        let json = to_value(&request).unwrap();

        assert_eq!(
            json,
            json!({
                "contents": [
                    { "role": "user", "parts": [{ "text": "You are a trainer." }] },
                    { "role": "user", "parts": [{ "text": "hello" }] }
                ],
                "generationConfig": {
                    "temperature": 0.7,
                    "topK": 40,
                    "topP": 0.95,
                    "maxOutputTokens": 1024
                }
            })
        );
    }

    #[test]
    fn generation_config_is_omitted_when_absent() {
        let request = GenerateContentRequest::new(vec![Content::user("hi")]);
        let json = to_value(&request).unwrap();
        assert_eq!(
            json,
            json!({
                "contents": [{ "role": "user", "parts": [{ "text": "hi" }] }]
            })
        );
    }
}
