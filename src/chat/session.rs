//! Core session management.
//!
//! This module provides the `ChatSession` struct which owns the transcript
//! and drives the turn-taking cycle against a completion backend.

use crate::Gemini;
use crate::chat::config::{GreetingMode, TrainerConfig};
use crate::chat::format::{build_analysis_parts, build_contents};
use crate::chat::message::ChatMessage;
use crate::error::{Error, Result};
use crate::observability;
use crate::types::{Content, DataUri, GenerateContentRequest, Model};

/// Where the session is in its turn-taking cycle.
///
/// At most one remote call is outstanding per session; submissions made
/// while `Sending` are rejected at the input boundary.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SessionState {
    /// No backend attached yet; remote operations are blocked.
    AwaitingCredential,

    /// Ready to accept a submission.
    Idle,

    /// A remote call is outstanding.
    Sending,
}

/// Backend behavior expected by the session.
///
/// [`Gemini`] is the production implementation; tests drive the session
/// with scripted in-memory backends.
#[async_trait::async_trait]
pub trait CompletionBackend: Send + Sync {
    /// Perform one completion call and return the response text.
    async fn generate(&self, model: &Model, request: GenerateContentRequest) -> Result<String>;
}

#[async_trait::async_trait]
impl CompletionBackend for Gemini {
    async fn generate(&self, model: &Model, request: GenerateContentRequest) -> Result<String> {
        Gemini::generate(self, model, request).await
    }
}

/// A session that owns the conversation transcript and drives API
/// interactions.
///
/// The transcript is append-only: one user entry plus one bot entry per
/// successful text turn, two bot entries per successful image analysis.
/// On a failed turn the optimistically appended user entry remains and no
/// bot entry is added; the typed error is returned to the caller, who
/// decides how to surface it.
pub struct ChatSession<B: CompletionBackend> {
    backend: Option<B>,
    config: TrainerConfig,
    transcript: Vec<ChatMessage>,
    state: SessionState,
    request_count: u64,
}

/// Aggregated stats for a session.
#[derive(Debug, Clone)]
pub struct SessionStats {
    /// The completion model.
    pub model: Model,
    /// The vision model.
    pub vision_model: Model,
    /// The number of entries in the transcript.
    pub message_count: usize,
    /// Total number of remote calls dispatched.
    pub total_requests: u64,
    /// How the opening greeting entered the transcript.
    pub greeting_mode: GreetingMode,
    /// The sampling temperature, if set.
    pub temperature: Option<f32>,
    /// The top-p value, if set.
    pub top_p: Option<f32>,
    /// The top-k value, if set.
    pub top_k: Option<u32>,
    /// The maximum tokens per response, if set.
    pub max_output_tokens: Option<u32>,
}

impl ChatSession<Gemini> {
    /// Creates a session with no credential attached.
    ///
    /// Remote operations fail with an authentication error until
    /// [`supply_credential`](Self::supply_credential) is called.
    pub fn awaiting_credential(config: TrainerConfig) -> Self {
        Self {
            backend: None,
            config,
            transcript: Vec::new(),
            state: SessionState::AwaitingCredential,
            request_count: 0,
        }
    }

    /// Builds a Gemini client from the supplied key and attaches it.
    pub fn supply_credential(&mut self, api_key: String) -> Result<()> {
        let client = Gemini::new(Some(api_key))?;
        self.attach_backend(client);
        Ok(())
    }
}

impl<B: CompletionBackend> ChatSession<B> {
    /// Creates a new session with the given backend and configuration.
    pub fn new(backend: B, config: TrainerConfig) -> Self {
        Self {
            backend: Some(backend),
            config,
            transcript: Vec::new(),
            state: SessionState::Idle,
            request_count: 0,
        }
    }

    /// Attaches a backend, unblocking remote operations.
    pub fn attach_backend(&mut self, backend: B) {
        self.backend = Some(backend);
        if self.state == SessionState::AwaitingCredential {
            self.state = SessionState::Idle;
        }
    }

    /// Bootstraps the transcript with the opening greeting.
    ///
    /// In `GreetingMode::Static` the configured greeting is appended with
    /// no network call. In `GreetingMode::Generated` one completion call
    /// is made over the empty transcript and its result becomes the
    /// greeting. Either way the transcript afterwards starts with exactly
    /// one bot entry.
    pub async fn start(&mut self) -> Result<()> {
        if !self.transcript.is_empty() {
            return Err(Error::validation(
                "session already started",
                Some("transcript".to_string()),
            ));
        }
        match self.config.greeting_mode {
            GreetingMode::Static => {
                self.transcript
                    .push(ChatMessage::bot(self.config.greeting.clone()));
                Ok(())
            }
            GreetingMode::Generated => {
                self.guard_idle()?;
                let request = self.completion_request();
                let model = self.config.model.clone();
                self.state = SessionState::Sending;
                let outcome = self.dispatch(&model, request).await;
                self.state = SessionState::Idle;
                match outcome {
                    Ok(greeting) => {
                        self.transcript.push(ChatMessage::bot(greeting));
                        Ok(())
                    }
                    Err(err) => {
                        observability::SESSION_TURN_ERRORS.click();
                        Err(err)
                    }
                }
            }
        }
    }

    /// Sends a user message and returns the bot reply.
    ///
    /// The user entry is appended before the call is made; on failure it
    /// remains in the transcript, no bot entry is appended, and the error
    /// is returned.
    pub async fn send(&mut self, user_input: &str) -> Result<String> {
        self.guard_idle()?;
        let user_input = user_input.trim();
        if user_input.is_empty() {
            return Err(Error::validation(
                "message must be non-empty",
                Some("message".to_string()),
            ));
        }

        observability::SESSION_TURNS.click();
        self.transcript.push(ChatMessage::user(user_input));

        let request = self.completion_request();
        let model = self.config.model.clone();
        self.state = SessionState::Sending;
        let outcome = self.dispatch(&model, request).await;
        self.state = SessionState::Idle;

        match outcome {
            Ok(reply) => {
                self.transcript.push(ChatMessage::bot(reply.clone()));
                Ok(reply)
            }
            Err(err) => {
                observability::SESSION_TURN_ERRORS.click();
                Err(err)
            }
        }
    }

    /// Runs an image analysis and folds the result into the transcript.
    ///
    /// The image must already be validated by the caller (media type and
    /// size); no validation happens here. On success two bot entries are
    /// appended in one atomic update: the fixed preamble, then the
    /// analysis text. On failure the transcript is unchanged.
    pub async fn analyze_image(&mut self, image: &DataUri) -> Result<String> {
        self.guard_idle()?;

        observability::SESSION_ANALYSES.click();
        let parts = build_analysis_parts(&self.config.analysis_instruction, image);
        let request = GenerateContentRequest::new(vec![Content::user_parts(parts)])
            .with_generation_config(self.config.generation.clone());
        let model = self.config.vision_model.clone();
        self.state = SessionState::Sending;
        let outcome = self.dispatch(&model, request).await;
        self.state = SessionState::Idle;

        match outcome {
            Ok(analysis) => {
                self.transcript
                    .push(ChatMessage::bot(self.config.analysis_preamble.clone()));
                self.transcript.push(ChatMessage::bot(analysis.clone()));
                Ok(analysis)
            }
            Err(err) => {
                observability::SESSION_TURN_ERRORS.click();
                Err(err)
            }
        }
    }

    /// Clears the transcript back to its pre-`start` state.
    pub fn reset(&mut self) {
        self.transcript.clear();
    }

    /// Returns the transcript entries in order.
    pub fn transcript(&self) -> &[ChatMessage] {
        &self.transcript
    }

    /// Returns the current state.
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Returns true while a remote call is outstanding.
    pub fn is_loading(&self) -> bool {
        self.state == SessionState::Sending
    }

    /// Returns the number of entries in the transcript.
    pub fn message_count(&self) -> usize {
        self.transcript.len()
    }

    /// Returns the active configuration.
    pub fn config(&self) -> &TrainerConfig {
        &self.config
    }

    /// Returns the current completion model.
    pub fn model(&self) -> &Model {
        &self.config.model
    }

    /// Changes the completion model.
    pub fn set_model(&mut self, model: Model) {
        self.config.model = model;
    }

    /// Changes the vision model.
    pub fn set_vision_model(&mut self, model: Model) {
        self.config.vision_model = model;
    }

    /// Replaces the system prompt.
    pub fn set_system_prompt(&mut self, prompt: Option<String>) {
        self.config.system_prompt =
            prompt.unwrap_or_else(|| crate::chat::config::SYSTEM_PROMPT.to_string());
    }

    /// Sets the sampling temperature.
    pub fn set_temperature(&mut self, temperature: Option<f32>) {
        self.config.generation.temperature = temperature;
    }

    /// Sets the top-p value.
    pub fn set_top_p(&mut self, top_p: Option<f32>) {
        self.config.generation.top_p = top_p;
    }

    /// Sets the top-k value.
    pub fn set_top_k(&mut self, top_k: Option<u32>) {
        self.config.generation.top_k = top_k;
    }

    /// Sets the maximum tokens per response.
    pub fn set_max_output_tokens(&mut self, max_output_tokens: u32) {
        self.config.generation.max_output_tokens = Some(max_output_tokens);
    }

    /// Returns the current session statistics snapshot.
    pub fn stats(&self) -> SessionStats {
        SessionStats {
            model: self.config.model.clone(),
            vision_model: self.config.vision_model.clone(),
            message_count: self.message_count(),
            total_requests: self.request_count,
            greeting_mode: self.config.greeting_mode,
            temperature: self.config.generation.temperature,
            top_p: self.config.generation.top_p,
            top_k: self.config.generation.top_k,
            max_output_tokens: self.config.generation.max_output_tokens,
        }
    }

    fn guard_idle(&self) -> Result<()> {
        match self.state {
            SessionState::Sending => Err(Error::validation(
                "a remote call is already outstanding",
                Some("state".to_string()),
            )),
            SessionState::AwaitingCredential => {
                Err(Error::authentication("credential not supplied"))
            }
            SessionState::Idle => Ok(()),
        }
    }

    fn completion_request(&self) -> GenerateContentRequest {
        let contents = build_contents(&self.config.system_prompt, &self.transcript);
        GenerateContentRequest::new(contents)
            .with_generation_config(self.config.generation.clone())
    }

    async fn dispatch(&mut self, model: &Model, request: GenerateContentRequest) -> Result<String> {
        self.request_count = self.request_count.saturating_add(1);
        match &self.backend {
            Some(backend) => backend.generate(model, request).await,
            None => Err(Error::authentication("credential not supplied")),
        }
    }
}
