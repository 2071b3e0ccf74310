//! Configuration types for the trainer chat.
//!
//! This module provides CLI argument parsing via `arrrg` and configuration
//! structures for controlling session behavior.

use arrrg_derive::CommandLine;

use crate::types::{GenerationConfig, KnownModel, Model};

/// The fixed behavior prompt sent as the first turn of every request.
pub const SYSTEM_PROMPT: &str = "You are Fit.AI, a focused and efficient AI personal trainer. Your goal is to create personalized fitness plans for beginners. Keep the conversation natural and friendly.

Instructions:
- Ask ONLY these essential questions one at a time to gather information:
    - \"What's your current fitness level? Beginner, intermediate, or advanced?\"
    - \"What's your primary goal - weight loss, muscle gain, or general fitness?\"
    - \"Do you have any injuries or limitations I should be aware of?\"
    - \"How much time can you commit to exercise each week?\"
    - \"What equipment do you have access to?\"
- Keep responses concise but informative.
- Use simple, clear language.
- Include specific exercise instructions with reps and sets.
- Focus on proper form and safety.
- Maintain conversation context to avoid repeating questions.
- Never ask questions that were already answered.
- Keep the conversation flowing naturally
- Never prefix your responses with your name
- Maintain a conversational, friendly tone
- Do not use asterisks (*) for formatting, even if it's a bold text or heading. Use hyphens (-) instead for creating lists. Rely on the text being rendered bold without the need for asterisks.
- Do not use any markdown formatting.

After gathering basic information, provide:
1. A sample personalized workout plan considering time constraints, goals and limitations
2. Basic diet guidelines for beginners
3. Safety tips and proper form guidance for exercises

Remember previous responses and adapt recommendations accordingly. Stay focused on the user's stated goals and limitations.";

/// The synthesized greeting used when no onboarding call is made.
pub const GREETING: &str = "Hey I'm Fit.AI, I'm your virtual trainer always up to help. You can chat with me or upload your photo for a personalized fitness analysis!";

/// The fixed instruction sent alongside an uploaded photo.
pub const ANALYSIS_INSTRUCTION: &str = "You are Fit.AI, an AI personal trainer. Look at this photo and provide a fitness assessment: describe the person's apparent body type, suggest what their workouts should focus on, recommend specific exercises with reps and sets, and give diet suggestions suited to their build. Keep the tone encouraging and the language simple. Do not use asterisks or any markdown formatting.";

/// The fixed preamble appended before an analysis result.
pub const ANALYSIS_PREAMBLE: &str = "I've analyzed your photo. Here's my assessment:";

/// How the opening greeting enters the transcript.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum GreetingMode {
    /// Append the configured greeting text with no network call.
    #[default]
    Static,

    /// Generate the greeting with one completion call over the empty
    /// transcript.
    Generated,
}

/// Command-line arguments for the fitai tools.
#[derive(CommandLine, Debug, Default, PartialEq, Eq)]
pub struct TrainerArgs {
    /// Completion model to use.
    #[arrrg(optional, "Completion model (default: gemini-pro)", "MODEL")]
    pub model: Option<String>,

    /// Vision model used for image analysis.
    #[arrrg(optional, "Vision model (default: gemini-pro-vision)", "MODEL")]
    pub vision_model: Option<String>,

    /// Override the built-in trainer system prompt.
    #[arrrg(optional, "System prompt for the conversation", "PROMPT")]
    pub system: Option<String>,

    /// Override the built-in greeting text.
    #[arrrg(optional, "Greeting shown before the first user turn", "TEXT")]
    pub greeting: Option<String>,

    /// Generate the greeting with a model call instead of using fixed text.
    #[arrrg(flag, "Generate the greeting with a model call")]
    pub generated_greeting: bool,

    /// Maximum tokens per response.
    #[arrrg(optional, "Max tokens per response (default: 1024)", "TOKENS")]
    pub max_output_tokens: Option<u32>,

    /// Disable ANSI colors and styles.
    #[arrrg(flag, "Disable ANSI colors/styles")]
    pub no_color: bool,
}

/// Configuration for a trainer session.
///
/// This struct holds the resolved configuration values after processing
/// command-line arguments with appropriate defaults.
#[derive(Debug, Clone)]
pub struct TrainerConfig {
    /// The model used for completion turns.
    pub model: Model,

    /// The model used for image analysis.
    pub vision_model: Model,

    /// The behavior prompt sent as the first turn of every request.
    pub system_prompt: String,

    /// How the opening greeting enters the transcript.
    pub greeting_mode: GreetingMode,

    /// The greeting text used in `GreetingMode::Static`.
    pub greeting: String,

    /// The instruction sent alongside an uploaded photo.
    pub analysis_instruction: String,

    /// The preamble appended before an analysis result.
    pub analysis_preamble: String,

    /// Sampling parameters sent with every request.
    pub generation: GenerationConfig,

    /// Whether to use ANSI colors and styles in output.
    pub use_color: bool,
}

impl TrainerConfig {
    /// Creates a new TrainerConfig with default values.
    ///
    /// Defaults:
    /// - Model: gemini-pro; vision model: gemini-pro-vision
    /// - The built-in trainer system prompt and greeting
    /// - Static greeting (no onboarding call)
    /// - Sampling: temperature 0.7, topK 40, topP 0.95, maxOutputTokens 1024
    pub fn new() -> Self {
        Self {
            model: Model::Known(KnownModel::GeminiPro),
            vision_model: Model::Known(KnownModel::GeminiProVision),
            system_prompt: SYSTEM_PROMPT.to_string(),
            greeting_mode: GreetingMode::Static,
            greeting: GREETING.to_string(),
            analysis_instruction: ANALYSIS_INSTRUCTION.to_string(),
            analysis_preamble: ANALYSIS_PREAMBLE.to_string(),
            generation: GenerationConfig::default(),
            use_color: true,
        }
    }

    /// Sets the completion model.
    pub fn with_model(mut self, model: Model) -> Self {
        self.model = model;
        self
    }

    /// Sets the vision model.
    pub fn with_vision_model(mut self, model: Model) -> Self {
        self.vision_model = model;
        self
    }

    /// Sets the system prompt.
    pub fn with_system_prompt(mut self, prompt: String) -> Self {
        self.system_prompt = prompt;
        self
    }

    /// Sets the greeting mode.
    pub fn with_greeting_mode(mut self, mode: GreetingMode) -> Self {
        self.greeting_mode = mode;
        self
    }

    /// Sets the static greeting text.
    pub fn with_greeting(mut self, greeting: String) -> Self {
        self.greeting = greeting;
        self
    }

    /// Sets the sampling parameters.
    pub fn with_generation(mut self, generation: GenerationConfig) -> Self {
        self.generation = generation;
        self
    }

    /// Disables ANSI color output.
    pub fn without_color(mut self) -> Self {
        self.use_color = false;
        self
    }
}

impl Default for TrainerConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl From<TrainerArgs> for TrainerConfig {
    fn from(args: TrainerArgs) -> Self {
        let mut config = TrainerConfig::new();
        if let Some(model) = args.model {
            config.model = Model::from(model);
        }
        if let Some(model) = args.vision_model {
            config.vision_model = Model::from(model);
        }
        if let Some(system) = args.system {
            config.system_prompt = system;
        }
        if let Some(greeting) = args.greeting {
            config.greeting = greeting;
        }
        if args.generated_greeting {
            config.greeting_mode = GreetingMode::Generated;
        }
        if let Some(max_output_tokens) = args.max_output_tokens {
            config.generation = config.generation.with_max_output_tokens(max_output_tokens);
        }
        config.use_color = !args.no_color;
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = TrainerConfig::new();
        assert_eq!(config.model, Model::Known(KnownModel::GeminiPro));
        assert_eq!(config.vision_model, Model::Known(KnownModel::GeminiProVision));
        assert_eq!(config.greeting_mode, GreetingMode::Static);
        assert_eq!(config.greeting, GREETING);
        assert_eq!(config.system_prompt, SYSTEM_PROMPT);
        assert_eq!(config.generation.max_output_tokens, Some(1024));
        assert!(config.use_color);
    }

    #[test]
    fn config_from_args_defaults() {
        let args = TrainerArgs::default();
        let config = TrainerConfig::from(args);
        assert_eq!(config.model, Model::Known(KnownModel::GeminiPro));
        assert_eq!(config.greeting_mode, GreetingMode::Static);
        assert!(config.use_color);
    }

    #[test]
    fn config_from_args_custom() {
        let args = TrainerArgs {
            model: Some("gemini-1.5-flash".to_string()),
            vision_model: Some("gemini-1.5-pro".to_string()),
            system: Some("You are terse.".to_string()),
            greeting: Some("Welcome back.".to_string()),
            generated_greeting: true,
            max_output_tokens: Some(2048),
            no_color: true,
        };
        let config = TrainerConfig::from(args);
        assert_eq!(config.model, Model::Known(KnownModel::Gemini15Flash));
        assert_eq!(config.vision_model, Model::Known(KnownModel::Gemini15Pro));
        assert_eq!(config.system_prompt, "You are terse.");
        assert_eq!(config.greeting, "Welcome back.");
        assert_eq!(config.greeting_mode, GreetingMode::Generated);
        assert_eq!(config.generation.max_output_tokens, Some(2048));
        assert!(!config.use_color);
    }

    #[test]
    fn config_builder_pattern() {
        let config = TrainerConfig::new()
            .with_model(Model::from("gemini-1.5-pro"))
            .with_system_prompt("Test prompt".to_string())
            .with_greeting_mode(GreetingMode::Generated)
            .with_generation(GenerationConfig::new().with_temperature(0.2))
            .without_color();

        assert_eq!(config.model, Model::Known(KnownModel::Gemini15Pro));
        assert_eq!(config.system_prompt, "Test prompt");
        assert_eq!(config.greeting_mode, GreetingMode::Generated);
        assert_eq!(config.generation.temperature, Some(0.2));
        assert!(!config.use_color);
    }

    #[test]
    fn system_prompt_forbids_emphasis_markup() {
        assert!(SYSTEM_PROMPT.contains("Do not use asterisks"));
        assert!(ANALYSIS_INSTRUCTION.contains("Do not use asterisks"));
    }
}
