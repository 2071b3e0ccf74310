use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Represents a generative-language model identifier.
///
/// This can be a predefined model version or a custom string value
/// for models that may be added in the future.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Model {
    /// Known model versions
    Known(KnownModel),

    /// Custom model identifier (for future models or private models)
    Custom(String),
}

/// Known generative-language model versions
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KnownModel {
    /// Gemini Pro, the text completion model.
    #[serde(rename = "gemini-pro")]
    GeminiPro,

    /// Gemini Pro Vision, the image-capable model.
    #[serde(rename = "gemini-pro-vision")]
    GeminiProVision,

    /// Gemini 1.5 Flash.
    #[serde(rename = "gemini-1.5-flash")]
    Gemini15Flash,

    /// Gemini 1.5 Pro.
    #[serde(rename = "gemini-1.5-pro")]
    Gemini15Pro,
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Model::Known(known_model) => write!(f, "{}", known_model),
            Model::Custom(custom) => write!(f, "{}", custom),
        }
    }
}

impl fmt::Display for KnownModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KnownModel::GeminiPro => write!(f, "gemini-pro"),
            KnownModel::GeminiProVision => write!(f, "gemini-pro-vision"),
            KnownModel::Gemini15Flash => write!(f, "gemini-1.5-flash"),
            KnownModel::Gemini15Pro => write!(f, "gemini-1.5-pro"),
        }
    }
}

impl FromStr for Model {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "gemini-pro" => Model::Known(KnownModel::GeminiPro),
            "gemini-pro-vision" => Model::Known(KnownModel::GeminiProVision),
            "gemini-1.5-flash" => Model::Known(KnownModel::Gemini15Flash),
            "gemini-1.5-pro" => Model::Known(KnownModel::Gemini15Pro),
            other => Model::Custom(other.to_string()),
        })
    }
}

impl From<KnownModel> for Model {
    fn from(model: KnownModel) -> Self {
        Model::Known(model)
    }
}

impl From<String> for Model {
    fn from(model: String) -> Self {
        model.parse().unwrap_or(Model::Custom(model))
    }
}

impl From<&str> for Model {
    fn from(model: &str) -> Self {
        model
            .parse()
            .unwrap_or_else(|_| Model::Custom(model.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_model_serialization() {
        let model = Model::Known(KnownModel::GeminiPro);
        let json = serde_json::to_string(&model).unwrap();
        assert_eq!(json, r#""gemini-pro""#);

        let model = Model::Known(KnownModel::GeminiProVision);
        let json = serde_json::to_string(&model).unwrap();
        assert_eq!(json, r#""gemini-pro-vision""#);
    }

    #[test]
    fn custom_model_serialization() {
        let model = Model::Custom("gemini-exp-1206".to_string());
        let json = serde_json::to_string(&model).unwrap();
        assert_eq!(json, r#""gemini-exp-1206""#);
    }

    #[test]
    fn display_matches_the_wire_identifier() {
        assert_eq!(
            Model::Known(KnownModel::Gemini15Flash).to_string(),
            "gemini-1.5-flash"
        );
        assert_eq!(Model::Custom("my-model".to_string()).to_string(), "my-model");
    }

    #[test]
    fn parse_recognizes_known_models() {
        let model: Model = "gemini-pro".parse().unwrap();
        assert_eq!(model, Model::Known(KnownModel::GeminiPro));

        let model: Model = "something-else".parse().unwrap();
        assert_eq!(model, Model::Custom("something-else".to_string()));
    }

    #[test]
    fn from_str_matches_parse() {
        assert_eq!(
            Model::from("gemini-1.5-pro"),
            Model::Known(KnownModel::Gemini15Pro)
        );
        assert_eq!(
            Model::from("tuned/my-trainer".to_string()),
            Model::Custom("tuned/my-trainer".to_string())
        );
    }
}
