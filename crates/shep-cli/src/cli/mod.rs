//! CLI entry and dispatch.

use anyhow::{Context, Result};
use clap::Parser;
use shep_core::config::Config;
use shep_core::logging;
use shep_core::session::ToolKind;

mod commands;

#[derive(Parser)]
#[command(name = "shep")]
#[command(version = "0.1")]
#[command(about = "Terminal front-end for the shepherd tool-session service")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Base URL of the shepherd service (overrides config)
    #[arg(long, value_name = "URL")]
    service_url: Option<String>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Register a tool session without entering the TUI
    Register {
        /// Tool kind: pprof, trace, or pprof-diff
        #[arg(long)]
        tool: String,

        /// Path to the primary input file
        #[arg(long)]
        path1: String,

        /// Path to the second input file (pprof-diff only)
        #[arg(long)]
        path2: Option<String>,

        /// Project label
        #[arg(long, default_value = "")]
        name: String,
    },

    /// Release a previously registered session's port
    Release {
        #[arg(value_name = "PORT")]
        port: u16,
    },

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
    /// Persist the service URL to the config file
    SetUrl {
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
    let mut config = Config::load().context("load config")?;
    if let Some(url) = cli.service_url.as_deref() {
        config.service_url = url.trim().trim_end_matches('/').to_string();
    }

    // default to the interactive session table
    let Some(command) = cli.command else {
        // The guard must outlive the TUI; dropping it flushes the log file.
        let _log_guard = logging::init_file_logging()?;
        return shep_tui::run(&config).await;
    };

    logging::init_stderr_logging();

    match command {
        Commands::Register {
            tool,
            path1,
            path2,
            name,
        } => {
            let tool: ToolKind = tool.parse().map_err(|e: String| anyhow::anyhow!(e))?;
            commands::oneshot::register(&config, tool, &name, &path1, path2.as_deref()).await
        }

        Commands::Release { port } => commands::oneshot::release(&config, port).await,

        Commands::Config { command } => match command {
            ConfigCommands::Path => commands::config::path(),
            ConfigCommands::Init => commands::config::init(),
            ConfigCommands::SetUrl { url } => commands::config::set_url(&url),
        },
    }
}
