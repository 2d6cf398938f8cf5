use crate::constants::{
    DEFAULT_API_KEY_ENV, DEFAULT_GEMINI_API_PATH, DEFAULT_GEMINI_ENDPOINT, DEFAULT_MAX_DELAY_MS,
    DEFAULT_MIN_DELAY_MS, DEFAULT_MODEL, DEFAULT_REQUEST_TIMEOUT_SECS, DEFAULT_SYSTEM_INSTRUCTION,
    MAX_MESSAGE_LENGTH, WARNING_THRESHOLD,
};

pub fn model() -> String {
    DEFAULT_MODEL.to_string()
}

pub fn endpoint() -> String {
    DEFAULT_GEMINI_ENDPOINT.to_string()
}

pub fn api_path() -> String {
    DEFAULT_GEMINI_API_PATH.to_string()
}

pub fn api_key_env() -> String {
    DEFAULT_API_KEY_ENV.to_string()
}

pub fn system_instruction() -> String {
    DEFAULT_SYSTEM_INSTRUCTION.to_string()
}

pub const REQUEST_TIMEOUT_SECS: u64 = DEFAULT_REQUEST_TIMEOUT_SECS;
pub const MAX_LENGTH: usize = MAX_MESSAGE_LENGTH;
pub const WARNING_LENGTH: usize = WARNING_THRESHOLD;
pub const MIN_DELAY_MS: u64 = DEFAULT_MIN_DELAY_MS;
pub const MAX_DELAY_MS: u64 = DEFAULT_MAX_DELAY_MS;
