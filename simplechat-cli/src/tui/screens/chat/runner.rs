//! Chat runner - main event loop coordinator

use super::input::{CommandResult, InputAction, handle_input, parse_command};
use super::state::{ChatInfo, ChatState};
use super::ui::ChatUI;
use crate::tui::terminal::{TerminalSession, Tui};
use crossterm::event;
use simplechat_core::controller::ConversationController;
use simplechat_core::resolver::{Reply, Resolve, ResolveError};
use std::error::Error;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;
use tracing::debug;

type ReplyResult = Result<Reply, ResolveError>;

const HELP_TEXT: &str = "Commands: /clear (Ctrl+L) clears history, /exit (Ctrl+Q) quits";

/// Run the TUI chat interface
pub async fn run_chat(
    controller: ConversationController,
    info: ChatInfo,
) -> Result<(), Box<dyn Error>> {
    let mut session = TerminalSession::enter()?;
    let mut state = ChatState::new(controller, info);

    run_chat_loop(session.terminal(), &mut state).await
}

async fn run_chat_loop(terminal: &mut Tui, state: &mut ChatState) -> Result<(), Box<dyn Error>> {
    let (reply_tx, mut reply_rx) = mpsc::channel::<ReplyResult>(1);

    loop {
        terminal.draw(|frame| ChatUI::render(frame, state))?;

        while let Ok(result) = reply_rx.try_recv() {
            state.apply_reply(result);
        }

        let timeout = if state.is_pending() {
            Duration::from_millis(50)
        } else {
            Duration::from_millis(100)
        };

        if event::poll(timeout)? {
            let action = handle_input(state, event::read()?);

            match action {
                InputAction::Exit => return Ok(()),
                InputAction::Submit => {
                    if let Some(pending) = state.submit_input(Instant::now()) {
                        spawn_reply(
                            state.controller().resolver(),
                            pending.prompt,
                            reply_tx.clone(),
                        );
                    }
                }
                InputAction::Command(cmd) => match parse_command(&cmd) {
                    // Unknown `/...` text never reaches here; it is submitted as a message
                    CommandResult::None | CommandResult::Unknown(_) => {}
                    CommandResult::ShowHelp => state.status_message = Some(HELP_TEXT.into()),
                    CommandResult::Clear => state.request_reset(),
                    CommandResult::Exit => return Ok(()),
                },
                InputAction::RequestReset => state.request_reset(),
                InputAction::ConfirmReset => state.confirm_reset(),
                InputAction::CancelReset => state.cancel_reset(),
                InputAction::ScrollUp => state.scroll_up(),
                InputAction::ScrollDown => state.scroll_down(),
                InputAction::ScrollTop => state.scroll_to_top(),
                InputAction::ScrollBottom => state.scroll_to_bottom(),
                InputAction::None => {}
            }
        }

        state.typing.tick(Instant::now());
    }
}

/// Resolve off the event loop. A panicking resolver becomes `ResolveError::Aborted`.
fn spawn_reply(resolver: Arc<dyn Resolve>, prompt: String, tx: mpsc::Sender<ReplyResult>) {
    tokio::spawn(async move {
        let task = tokio::spawn(async move { resolver.resolve(&prompt).await });
        let result = match task.await {
            Ok(result) => result,
            Err(err) => Err(ResolveError::Aborted(err.to_string())),
        };
        if tx.send(result).await.is_err() {
            debug!("Chat screen closed before the reply arrived");
        }
    });
}
