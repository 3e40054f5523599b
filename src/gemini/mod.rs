//! Google Gemini generative image API.
//!
//! # Modules
//!
//! - [`client`]: blocking `generateContent` client with fixed-count retry
//! - [`prompt`]: prompt assembly from post metadata and category styles
//! - `wire`: serde types for the REST payloads

mod client;
mod prompt;
mod wire;

pub use client::{GeminiClient, GeneratedOutput, Model};
pub use prompt::{cover_prompt, edit_prompt};
