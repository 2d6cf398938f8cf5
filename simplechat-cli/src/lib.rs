pub mod cli;
pub mod stdio;
pub mod tui;

pub use cli::{Cli, RunMode};

use simplechat_core::config::AppConfig;
use simplechat_core::controller::ConversationController;
use simplechat_core::model::ClientFactory;
use simplechat_core::resolver::ResponseResolver;
use std::error::Error;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, fmt};
use tui::screens::chat::ChatInfo;

pub async fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    init_tracing(cli.mode);
    info!("Starting simplechat");
    debug!(
        mode = ?cli.mode,
        config = ?cli.config,
        model = ?cli.model,
        seed = ?cli.seed,
        offline = cli.offline,
        "CLI arguments parsed"
    );

    let config_path = cli.config.as_deref().map(Path::new);
    let mut config = AppConfig::load(config_path)?;
    apply_cli_overrides(&cli, &mut config);

    let client = ClientFactory::from_config(&config);
    let info = ChatInfo {
        model: config.model.clone(),
        remote: client.is_some(),
    };
    let resolver = Arc::new(ResponseResolver::from_config(&config, client));
    let controller = ConversationController::new(resolver, config.limits);

    info!(mode = ?cli.mode, remote = info.remote, "Running chat");
    match cli.mode {
        RunMode::Tui => tui::screens::run_chat(controller, info).await?,
        RunMode::Stdio => stdio::run(controller, info).await?,
    }
    info!("Chat finished");
    Ok(())
}

fn init_tracing(mode: RunMode) {
    static INIT: std::sync::Once = std::sync::Once::new();
    INIT.call_once(|| {
        // The TUI owns the terminal; any log line would tear the screen.
        let filter = match mode {
            RunMode::Tui => EnvFilter::new("off"),
            RunMode::Stdio => {
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
            }
        };
        fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .with_level(true)
            .init();
    });
}

fn apply_cli_overrides(cli: &Cli, config: &mut AppConfig) {
    if let Some(model) = &cli.model {
        info!(model = model.as_str(), "Overriding model based on CLI flag");
        config.model = model.clone();
    }
    if let Some(seed) = cli.seed {
        config.fallback.seed = Some(seed);
    }
    if cli.offline {
        config.offline = true;
    }
}
