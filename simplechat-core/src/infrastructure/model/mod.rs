//! Model infrastructure module
//!
//! # Structure
//! - `types` - Request, Response, Error types
//! - `traits` - ModelClient trait
//! - `factory` - builds the optional remote client from config and environment
//! - `clients` - HTTP client implementations

pub mod clients;
pub mod factory;
pub mod traits;
pub mod types;

pub use clients::GeminiClient;
pub use factory::ClientFactory;
pub use traits::ModelClient;
pub use types::{GenerateRequest, GenerateResponse, ModelError};
