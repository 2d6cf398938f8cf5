use clap::{Parser, ValueEnum};

#[derive(Parser, Debug)]
#[command(
    name = "simplechat",
    version,
    about = "Simple chat client with a Gemini backend and an offline fallback"
)]
pub struct Cli {
    /// Path to chat.toml (defaults to config/chat.toml when present)
    #[arg(long)]
    pub config: Option<String>,
    #[arg(long, short, value_enum, default_value_t = RunMode::Tui)]
    pub mode: RunMode,
    /// Override the Gemini model name
    #[arg(long)]
    pub model: Option<String>,
    /// Seed for reproducible fallback replies
    #[arg(long)]
    pub seed: Option<u64>,
    /// Never call the remote API
    #[arg(long)]
    pub offline: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum RunMode {
    /// Full-screen terminal chat
    Tui,
    /// Line-oriented chat over stdin/stdout
    Stdio,
}
