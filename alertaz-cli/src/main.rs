//! Alertaz CLI - command line tool for the Alertaz backend API.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "alertaz-cli",
    version,
    about = "Alertaz messaging and market data toolkit"
)]
struct Cli {
    /// Backend API base URL
    #[arg(long, env = "ALERTAZ_API_BASE_URL", default_value = alertaz_cmd::DEFAULT_API_BASE_URL, global = true)]
    api_base_url: String,

    #[command(subcommand)]
    command: alertaz_cmd::Command,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    alertaz_cmd::run(&cli.api_base_url, cli.command).await
}
