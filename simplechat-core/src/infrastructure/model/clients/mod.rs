//! HTTP model clients

mod base;
mod gemini;

pub use base::HttpTransport;
pub use gemini::{GEMINI_CLIENT_ID, GeminiClient};
