//! Chat screen tests

pub mod command_tests;
pub mod input_tests;
pub mod message_tests;
pub mod scroll_tests;
pub mod state_tests;
pub mod typing_tests;

use simplechat_cli::tui::screens::chat::{ChatInfo, ChatState};
use simplechat_core::config::{FallbackConfig, InputLimits};
use simplechat_core::controller::ConversationController;
use simplechat_core::resolver::ResponseResolver;
use std::sync::Arc;

/// Offline chat state with an instant, seeded fallback responder
pub fn offline_state() -> ChatState {
    let fallback = FallbackConfig {
        seed: Some(1),
        ..FallbackConfig::immediate()
    };
    let resolver = ResponseResolver::new(
        None,
        "test-model",
        "Be brief.",
        simplechat_core::fallback::FallbackResponder::new(&fallback),
    );
    let controller = ConversationController::new(Arc::new(resolver), InputLimits::default());
    ChatState::new(
        controller,
        ChatInfo {
            model: "test-model".to_string(),
            remote: false,
        },
    )
}
