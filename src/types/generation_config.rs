use serde::{Deserialize, Serialize};

/// Sampling parameters for a generateContent request.
///
/// The defaults match the values the trainer front end has always used:
/// temperature 0.7, topK 40, topP 0.95, maxOutputTokens 1024.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    /// Randomness of the output.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,

    /// Candidate pool size considered at each step.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_k: Option<u32>,

    /// Cumulative probability mass cutoff.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f32>,

    /// Hard cap on response length.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_output_tokens: Option<u32>,
}

impl GenerationConfig {
    /// Creates a new `GenerationConfig` with no parameters set.
    pub fn new() -> Self {
        Self {
            temperature: None,
            top_k: None,
            top_p: None,
            max_output_tokens: None,
        }
    }

    /// Sets the sampling temperature.
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Sets the top-k sampling limit.
    pub fn with_top_k(mut self, top_k: u32) -> Self {
        self.top_k = Some(top_k);
        self
    }

    /// Sets the top-p nucleus sampling value.
    pub fn with_top_p(mut self, top_p: f32) -> Self {
        self.top_p = Some(top_p);
        self
    }

    /// Sets the maximum output length in tokens.
    pub fn with_max_output_tokens(mut self, max_output_tokens: u32) -> Self {
        self.max_output_tokens = Some(max_output_tokens);
        self
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self::new()
            .with_temperature(0.7)
            .with_top_k(40)
            .with_top_p(0.95)
            .with_max_output_tokens(1024)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, to_value};

    #[test]
    fn default_matches_the_fixed_parameters() {
        let config = GenerationConfig::default();
        assert_eq!(config.temperature, Some(0.7));
        assert_eq!(config.top_k, Some(40));
        assert_eq!(config.top_p, Some(0.95));
        assert_eq!(config.max_output_tokens, Some(1024));
    }

    #[test]
    fn camel_case_serialization() {
        let config = GenerationConfig::default();
        let json = to_value(&config).unwrap();

        assert_eq!(
            json,
            json!({
                "temperature": 0.7,
                "topK": 40,
                "topP": 0.95,
                "maxOutputTokens": 1024
            })
        );
    }

    #[test]
    fn unset_parameters_are_omitted() {
        let config = GenerationConfig::new().with_temperature(0.2);
        let json = to_value(&config).unwrap();
        assert_eq!(json, json!({ "temperature": 0.2 }));
    }
}
