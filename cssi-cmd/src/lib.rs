//! Command implementations for the dashboard CLI.
//!
//! Provides the `serve` subcommand (HTTP listener for the built dashboard
//! and its JSON API) and offline tools for checking the dataset and
//! inspecting panels and chart specs.

use clap::Subcommand;
use std::path::PathBuf;

pub mod report;
pub mod serve;

/// Where `dx build --release` puts the web bundle (`out_dir` in Dioxus.toml).
pub const DEFAULT_DIST: &str = "cssi-dashboard/dist";

#[derive(Subcommand)]
pub enum Command {
    /// Serve the dashboard and its JSON API
    Serve {
        /// Dataset CSV to load instead of the embedded one
        #[arg(short = 'd', long)]
        dataset: Option<PathBuf>,

        /// Directory holding the built dashboard (index.html + wasm)
        #[arg(long, default_value = DEFAULT_DIST)]
        dist: PathBuf,

        /// Address to bind
        #[arg(long, default_value = serve::DEFAULT_HOST)]
        host: String,

        /// Port to listen on
        #[arg(short = 'p', long, default_value_t = serve::DEFAULT_PORT)]
        port: u16,
    },

    /// Load the dataset and check it against the indicator vocabulary
    Validate {
        /// Dataset CSV to check instead of the embedded one
        #[arg(short = 'd', long)]
        dataset: Option<PathBuf>,
    },

    /// Print the spec of one chart as JSON
    Chart {
        /// Chart id, e.g. `covid-bar` or `ssi-scatter`
        chart: String,

        /// Control value as CONTROL=VALUE; repeat for several countries
        #[arg(short = 's', long = "select", value_name = "CONTROL=VALUE")]
        selections: Vec<String>,

        /// Dataset CSV to load instead of the embedded one
        #[arg(short = 'd', long)]
        dataset: Option<PathBuf>,
    },

    /// Print the panel routed from a path as JSON
    Panel {
        /// URL path, e.g. `/sustainability`
        #[arg(default_value = "/")]
        path: String,
    },
}

pub async fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Serve {
            dataset,
            dist,
            host,
            port,
        } => serve::run_serve(dataset.as_deref(), &dist, &host, port).await,
        Command::Validate { dataset } => report::run_validate(dataset.as_deref()),
        Command::Chart {
            chart,
            selections,
            dataset,
        } => report::run_chart(dataset.as_deref(), &chart, &selections),
        Command::Panel { path } => report::run_panel(&path),
    }
}
