//! CSSI CLI - serve and inspect the COVID-19 & Sustainability dashboard.

use clap::Parser;
use env_logger::Env;

#[derive(Parser)]
#[command(
    name = "cssi-cli",
    version,
    about = "COVID-19 and Sustainable Society Index dashboard"
)]
struct Cli {
    #[command(subcommand)]
    command: cssi_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("debug")).init();
    let cli = Cli::parse();
    cssi_cmd::run(cli.command).await
}
