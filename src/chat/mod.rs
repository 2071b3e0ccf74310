//! Conversational layer for the Fit.AI trainer.
//!
//! This module provides the session machinery built on top of the
//! [`Gemini`](crate::Gemini) client. It supports:
//!
//! - An append-only transcript of user and bot entries
//! - Turn-taking against the completion endpoint with a single
//!   outstanding call at a time
//! - Out-of-band image analysis folded back into the transcript
//! - Slash commands for session control
//!
//! # Architecture
//!
//! The module is organized into several components:
//!
//! - [`config`]: CLI argument parsing and configuration
//! - [`session`]: Core session management and API interaction
//! - [`format`]: Transcript-to-request shaping
//! - [`commands`]: Slash command parsing and handling
//! - [`upload`]: Image intake and validation
//! - [`notice`]: Notification payloads for front ends

pub mod commands;
pub mod config;
pub mod format;
pub mod message;
pub mod notice;
pub mod session;
pub mod upload;

pub use commands::{TrainerCommand, help_text, parse_command};
pub use config::{GreetingMode, TrainerArgs, TrainerConfig};
pub use format::{build_analysis_parts, build_contents, is_bot_for, role_for};
pub use message::ChatMessage;
pub use notice::{Notice, Severity};
pub use session::{ChatSession, CompletionBackend, SessionState, SessionStats};
pub use upload::{MAX_IMAGE_BYTES, load_image};
