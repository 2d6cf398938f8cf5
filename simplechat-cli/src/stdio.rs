//! Line-oriented chat over stdin/stdout

use crate::tui::screens::chat::ChatInfo;
use simplechat_core::controller::{ConversationController, SubmitOutcome};
use simplechat_core::resolver::ReplySource;
use simplechat_core::types::{Message, Sender};
use simplechat_core::validation::Rejection;
use thiserror::Error;
use tokio::io::{self, AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader, Lines};
use tracing::debug;

#[derive(Debug, Error)]
pub enum StdioError {
    #[error("stdin/stdout I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to encode transcript: {0}")]
    Transcript(#[from] serde_json::Error),
}

enum LoopControl {
    Continue,
    Exit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StdioCommand {
    Help,
    Clear,
    Transcript,
    Exit,
}

/// Known slash command named by `line`; anything else is chat text.
fn parse_stdio_command(line: &str) -> Option<StdioCommand> {
    let rest = line.trim().strip_prefix('/')?;
    let name = rest.split_whitespace().next().unwrap_or("").to_ascii_lowercase();
    match name.as_str() {
        "help" | "?" => Some(StdioCommand::Help),
        "clear" | "reset" | "new" => Some(StdioCommand::Clear),
        "transcript" => Some(StdioCommand::Transcript),
        "exit" | "quit" | "bye" => Some(StdioCommand::Exit),
        _ => None,
    }
}

pub async fn run(controller: ConversationController, info: ChatInfo) -> Result<(), StdioError> {
    let stdin = BufReader::new(io::stdin());
    let mut stdout = io::stdout();
    run_with(controller, info, stdin, &mut stdout).await
}

/// Drive a conversation from any line source into any writer
pub async fn run_with<R, W>(
    mut controller: ConversationController,
    info: ChatInfo,
    reader: R,
    out: &mut W,
) -> Result<(), StdioError>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = reader.lines();

    print_banner(out, &info).await?;
    for message in controller.messages() {
        print_message(out, message).await?;
    }

    loop {
        out.write_all(b"> ").await?;
        out.flush().await?;

        let Some(line) = lines.next_line().await? else {
            write_line(out, "").await?;
            break;
        };

        if let Some(command) = parse_stdio_command(&line) {
            match handle_command(command, &mut controller, &mut lines, out).await? {
                LoopControl::Continue => continue,
                LoopControl::Exit => break,
            }
        }

        match controller.begin(&line) {
            Ok(pending) => {
                write_line(out, "Typing...").await?;
                let result = controller.resolver().resolve(&pending.prompt).await;
                let outcome = controller.complete(result);
                if let Some(message) = controller.session().last() {
                    print_message(out, message).await?;
                }
                if info.remote && outcome == SubmitOutcome::Replied(ReplySource::Fallback) {
                    write_line(out, "  (offline reply)").await?;
                }
            }
            Err(Rejection::TooLong { length, max }) => {
                debug!(length, max, "Over-long input ignored");
                write_line(out, &format!("  ({length} / {max}, message not sent)")).await?;
            }
            Err(rejection) => debug!(%rejection, "Input ignored"),
        }
    }

    out.flush().await?;
    Ok(())
}

async fn handle_command<R, W>(
    command: StdioCommand,
    controller: &mut ConversationController,
    lines: &mut Lines<R>,
    out: &mut W,
) -> Result<LoopControl, StdioError>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    debug!(?command, "Processing STDIO command");

    match command {
        StdioCommand::Help => print_help(out).await?,
        StdioCommand::Exit => return Ok(LoopControl::Exit),
        StdioCommand::Clear => {
            out.write_all(b"Are you sure you want to clear the conversation history? [y/N] ")
                .await?;
            out.flush().await?;
            let answer = lines.next_line().await?.unwrap_or_default();
            if matches!(answer.trim(), "y" | "Y" | "yes") {
                controller.reset();
                for message in controller.messages() {
                    print_message(out, message).await?;
                }
            }
        }
        StdioCommand::Transcript => {
            let json = serde_json::to_string_pretty(controller.messages())?;
            write_line(out, &json).await?;
        }
    }
    Ok(LoopControl::Continue)
}

async fn print_banner<W: AsyncWrite + Unpin>(out: &mut W, info: &ChatInfo) -> Result<(), StdioError> {
    let backend = if info.remote {
        info.model.as_str()
    } else {
        "offline mode"
    };
    write_line(out, &format!("Simple Chat ({backend}). Type /help for commands.")).await
}

async fn print_help<W: AsyncWrite + Unpin>(out: &mut W) -> Result<(), StdioError> {
    write_line(
        out,
        "Commands:\n  /help        - Show this help\n  /clear       - Clear conversation history\n  /transcript  - Print the conversation as JSON\n  /exit        - Exit chat",
    )
    .await
}

async fn print_message<W: AsyncWrite + Unpin>(out: &mut W, message: &Message) -> Result<(), StdioError> {
    let label = match (message.sender, message.is_error) {
        (Sender::User, _) => "You",
        (Sender::Bot, false) => "Bot",
        (Sender::Bot, true) => "Bot [error]",
    };
    write_line(out, &format!("{label}: {}", message.text)).await
}

async fn write_line<W: AsyncWrite + Unpin>(out: &mut W, text: &str) -> Result<(), StdioError> {
    out.write_all(text.as_bytes()).await?;
    out.write_all(b"\n").await?;
    Ok(())
}
