//! CLI entry and dispatch.

use anyhow::{Context, Result};
use clap::Parser;
use macrolog_core::config;

mod commands;

#[derive(Parser)]
#[command(name = "macrolog")]
#[command(version)]
#[command(about = "Track calories and protein from the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Override the API base URL from config for this run
    #[arg(long, value_name = "URL", env = "MACROLOG_API_URL")]
    api_url: Option<String>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Print today's totals, targets and log entries
    Today,

    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(clap::Subcommand)]
enum ConfigCommands {
    /// Show the path to the config file
    Path,
    /// Initialize a default config file (if not present)
    Init,
    /// Set the API base URL in the config file
    SetUrl {
        /// Base URL of the nutrition API
        #[arg(value_name = "URL")]
        url: String,
    },
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // one tokio runtime for everything
    let rt = tokio::runtime::Runtime::new().context("create tokio runtime")?;

    rt.block_on(async move { dispatch(cli).await })
}

async fn dispatch(cli: Cli) -> Result<()> {
    let Cli { command, api_url } = cli;

    // Config commands work without loading (a broken file can still be fixed)
    let command = match command {
        Some(Commands::Config { command }) => {
            return match command {
                ConfigCommands::Path => {
                    commands::config::path();
                    Ok(())
                }
                ConfigCommands::Init => commands::config::init(),
                ConfigCommands::SetUrl { url } => commands::config::set_url(&url),
            };
        }
        other => other,
    };

    let mut config = config::Config::load().context("load config")?;
    if let Some(url) = api_url.as_deref().map(str::trim).filter(|url| !url.is_empty()) {
        config.api_base_url = url.trim_end_matches('/').to_string();
    }

    let _log_guard = macrolog_core::logging::init(&config).context("init logging")?;

    match command {
        Some(Commands::Today) => commands::today::run(&config).await,
        _ => commands::interactive::run(&config),
    }
}
