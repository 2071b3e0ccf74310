// Public modules
pub mod blob;
pub mod content;
pub mod data_uri;
pub mod generate_content_request;
pub mod generate_content_response;
pub mod generation_config;
pub mod model;
pub mod part;

// Re-exports
pub use blob::Blob;
pub use content::{Content, Role};
pub use data_uri::{DataUri, ImageMediaType};
pub use generate_content_request::GenerateContentRequest;
pub use generate_content_response::{Candidate, GenerateContentResponse};
pub use generation_config::GenerationConfig;
pub use model::{KnownModel, Model};
pub use part::Part;
