// Public modules
pub mod chat;
pub mod client;
pub mod client_logger;
pub mod error;
pub mod observability;
pub mod types;

// Re-exports
pub use chat::{ChatMessage, ChatSession, CompletionBackend, SessionState, TrainerConfig};
pub use client::Gemini;
pub use client_logger::ClientLogger;
pub use error::{Error, Result};
pub use types::*;
