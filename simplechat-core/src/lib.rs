//! Simple Chat core
//!
//! UI-independent pieces of the chat client:
//! - `domain` - message and sender types
//! - `config` - TOML + environment configuration
//! - `infrastructure` - Gemini model client
//! - `application` - session, conversation controller, resolver, fallback responder

pub mod application;
pub mod config;
pub mod constants;
pub mod domain;
pub mod infrastructure;

pub use application::{controller, fallback, resolver, session, validation};
pub use config::{AppConfig, ConfigError};
pub use domain::types;
pub use infrastructure::model;
