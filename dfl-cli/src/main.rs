//! DFL CLI - Command line tool for exploring Danish fishery landings.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "dfl-cli",
    version,
    about = "Danish fishery landings explorer"
)]
struct Cli {
    #[command(subcommand)]
    command: dfl_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    log::debug!("[Landings] cli: Starting");
    dfl_cmd::run(cli.command).await
}
