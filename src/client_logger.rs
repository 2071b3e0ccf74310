//! Logging trait for generative-language client operations.
//!
//! This module provides the [`ClientLogger`] trait that allows users to
//! capture and log all API interactions passing through the
//! [`Gemini`](crate::Gemini) client.

use crate::types::{GenerateContentRequest, GenerateContentResponse};

/// A trait for logging client operations.
///
/// Implement this trait to capture and record the request bodies sent to
/// the API and the response envelopes that come back. Attach an
/// implementation with [`Gemini::with_logger`](crate::Gemini::with_logger).
///
/// # Example
///
/// ```rust,ignore
/// use fitai::{ClientLogger, GenerateContentRequest, GenerateContentResponse};
/// use std::io::Write;
/// use std::sync::Mutex;
///
/// struct FileLogger {
///     file: Mutex<std::fs::File>,
/// }
///
/// impl ClientLogger for FileLogger {
///     fn log_request(&self, request: &GenerateContentRequest) {
///         let mut file = self.file.lock().unwrap();
///         writeln!(file, "Request: {}", serde_json::to_string(request).unwrap()).unwrap();
///     }
///
///     fn log_response(&self, response: &GenerateContentResponse) {
///         let mut file = self.file.lock().unwrap();
///         writeln!(file, "Response: {}", serde_json::to_string(response).unwrap()).unwrap();
///     }
/// }
/// ```
pub trait ClientLogger: Send + Sync {
    /// Log an outbound request body.
    ///
    /// Called once per `generate` call, before the request is sent.
    fn log_request(&self, request: &GenerateContentRequest);

    /// Log a successfully parsed response envelope.
    ///
    /// Called once per `generate` call that produced a parseable body,
    /// before candidate extraction.
    fn log_response(&self, response: &GenerateContentResponse);
}
