//! Application constants
//!
//! Single source of truth for paths, texts and limits.

/// Default configuration file path
pub const CONFIG_PATH: &str = "config/chat.toml";

/// Default environment file path
pub const ENV_PATH: &str = "config/.env";

/// Environment variable holding the Gemini credential
pub const DEFAULT_API_KEY_ENV: &str = "API_KEY";

/// Default Gemini endpoint and API path
pub const DEFAULT_GEMINI_ENDPOINT: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_GEMINI_API_PATH: &str = "v1beta/models";
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

pub const DEFAULT_SYSTEM_INSTRUCTION: &str = "You are a helpful, friendly, and concise chat assistant. Keep responses brief and conversational.";

/// Input length ceiling, counted in characters
pub const MAX_MESSAGE_LENGTH: usize = 1000;

/// Counter turns to the warning colour from this length on
pub const WARNING_THRESHOLD: usize = 800;

/// Simulated latency window of the local fallback, in milliseconds
pub const DEFAULT_MIN_DELAY_MS: u64 = 600;
pub const DEFAULT_MAX_DELAY_MS: u64 = 1600;

pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

pub const WELCOME_MESSAGE_ID: &str = "welcome-msg";
pub const WELCOME_TEXT: &str = "Hello! I'm your virtual assistant. How can I help you today?";
pub const RESET_TEXT: &str = "Chat history cleared. How can I help you?";
pub const ERROR_TEXT: &str = "Sorry, something went wrong. Please try again.";
