//! Application layer
//!
//! - `session` - ordered message list plus pending flag
//! - `controller` - the submit/reset pipeline
//! - `resolver` - remote-first reply resolution
//! - `fallback` - canned replies with simulated latency
//! - `delay` - injectable sleep
//! - `validation` - submission gate and input length gauge

pub mod controller;
pub mod delay;
pub mod fallback;
pub mod resolver;
pub mod session;
pub mod validation;

pub use controller::{ConversationController, PendingReply, SubmitOutcome};
pub use delay::{Delay, NoDelay, TokioDelay};
pub use fallback::FallbackResponder;
pub use resolver::{Reply, ReplySource, Resolve, ResolveError, ResponseResolver};
pub use session::Session;
pub use validation::{InputGauge, LengthStatus, Rejection};
