use clap::Parser;
use simplechat_cli::Cli;
use std::error::Error;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    simplechat_cli::run(cli).await
}
