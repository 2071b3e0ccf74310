//! Slash command parsing for the trainer REPL.
//!
//! This module handles parsing of special commands that start with `/`,
//! allowing users to control the session without sending messages to the
//! API.

/// A parsed session command.
///
/// These commands control the session and are not sent to the API.
#[derive(Debug, Clone, PartialEq)]
pub enum TrainerCommand {
    /// Clear the conversation and show the greeting again.
    Clear,

    /// Change the completion model.
    Model(String),

    /// Change the vision model.
    VisionModel(String),

    /// Set or restore the system prompt.
    /// `None` restores the built-in trainer prompt.
    System(Option<String>),

    /// Analyze an image from a file path.
    Analyze(String),

    /// Set the maximum tokens per response.
    MaxTokens(u32),

    /// Set the sampling temperature.
    Temperature(f32),

    /// Clear the sampling temperature (use model default).
    ClearTemperature,

    /// Set the top-p value.
    TopP(f32),

    /// Clear the top-p value.
    ClearTopP,

    /// Set the top-k value.
    TopK(u32),

    /// Clear the top-k value.
    ClearTopK,

    /// Display help information.
    Help,

    /// Exit the application.
    Quit,

    /// Display session statistics (message count, current models, etc.).
    Stats,

    /// Report a parsing error back to the caller.
    Invalid(String),
}

/// Parses user input for slash commands.
///
/// Returns `Some(TrainerCommand)` if the input is a command, or `None` if
/// it should be treated as a regular message.
///
/// # Examples
///
/// ```
/// # use fitai::chat::parse_command;
/// assert!(parse_command("/quit").is_some());
/// assert!(parse_command("/analyze photo.jpg").is_some());
/// assert!(parse_command("I want to lose weight").is_none());
/// ```
pub fn parse_command(input: &str) -> Option<TrainerCommand> {
    let input = input.trim();

    if !input.starts_with('/') {
        return None;
    }

    let mut parts = input[1..].splitn(2, ' ');
    let command = parts.next()?.to_lowercase();
    let argument = parts.next().map(|s| s.trim()).filter(|s| !s.is_empty());

    let result = match command.as_str() {
        "clear" => TrainerCommand::Clear,
        "model" => match argument {
            Some(model) => TrainerCommand::Model(model.to_string()),
            None => TrainerCommand::Invalid("/model requires a model name".to_string()),
        },
        "vision_model" => match argument {
            Some(model) => TrainerCommand::VisionModel(model.to_string()),
            None => TrainerCommand::Invalid("/vision_model requires a model name".to_string()),
        },
        "system" => TrainerCommand::System(argument.map(|s| s.to_string())),
        "analyze" => match argument {
            Some(path) => TrainerCommand::Analyze(path.to_string()),
            None => TrainerCommand::Invalid("/analyze requires an image path".to_string()),
        },
        "help" | "?" => TrainerCommand::Help,
        "quit" | "exit" | "q" => TrainerCommand::Quit,
        "stats" | "status" => TrainerCommand::Stats,
        "max_tokens" => match argument {
            Some(arg) => match arg.parse::<u32>() {
                Ok(value) => TrainerCommand::MaxTokens(value),
                Err(_) => {
                    TrainerCommand::Invalid("/max_tokens expects a positive integer".to_string())
                }
            },
            None => TrainerCommand::Invalid("/max_tokens requires a value".to_string()),
        },
        "temperature" => match argument {
            Some(arg) if arg.eq_ignore_ascii_case("clear") => TrainerCommand::ClearTemperature,
            Some(arg) => match parse_f32_in_range(arg, 0.0, 1.0) {
                Ok(value) => TrainerCommand::Temperature(value),
                Err(err) => TrainerCommand::Invalid(format!("/temperature {err}")),
            },
            None => TrainerCommand::Invalid("/temperature requires a value".to_string()),
        },
        "top_p" => match argument {
            Some(arg) if arg.eq_ignore_ascii_case("clear") => TrainerCommand::ClearTopP,
            Some(arg) => match parse_f32_in_range(arg, 0.0, 1.0) {
                Ok(value) => TrainerCommand::TopP(value),
                Err(err) => TrainerCommand::Invalid(format!("/top_p {err}")),
            },
            None => TrainerCommand::Invalid("/top_p requires a value".to_string()),
        },
        "top_k" => match argument {
            Some(arg) if arg.eq_ignore_ascii_case("clear") => TrainerCommand::ClearTopK,
            Some(arg) => match arg.parse::<u32>() {
                Ok(value) => TrainerCommand::TopK(value),
                Err(_) => TrainerCommand::Invalid("/top_k expects a positive integer".to_string()),
            },
            None => TrainerCommand::Invalid("/top_k requires a value".to_string()),
        },
        _ => TrainerCommand::Invalid(format!("Unknown command: /{}", command)),
    };

    Some(result)
}

fn parse_f32_in_range(value: &str, min: f32, max: f32) -> Result<f32, String> {
    match value.parse::<f32>() {
        Ok(parsed) if parsed >= min && parsed <= max => Ok(parsed),
        Ok(_) => Err(format!("expects a value between {min} and {max}")),
        Err(_) => Err("expects a number".to_string()),
    }
}

/// Returns the help text listing available commands.
pub fn help_text() -> String {
    [
        "/help             Show this help",
        "/quit             Exit",
        "/clear            Clear the conversation and greet again",
        "/stats            Show session statistics",
        "/analyze <path>   Analyze an image (jpeg/png/gif/webp, max 5 MiB)",
        "/model <name>     Change the completion model",
        "/vision_model <name>  Change the vision model",
        "/system [prompt]  Set or restore the system prompt",
        "/max_tokens <n>   Set max tokens per response",
        "/temperature <t>  Set sampling temperature (0.0-1.0, or 'clear')",
        "/top_p <p>        Set top-p (0.0-1.0, or 'clear')",
        "/top_k <k>        Set top-k (or 'clear')",
    ]
    .join("\n")
}
