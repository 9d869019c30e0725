//! Example agent - main entry point
//!
//! Running the binary with no arguments executes the full agent sequence
//! with built-in defaults; a TOML configuration file is optional.

use clap::{Parser, Subcommand};
use example_agent::agent::Agent;
use example_agent::config::{load_env_file, AgentConfig};
use example_agent::error::AgentResult;
use example_agent::observability::init_default_logging;
use std::path::PathBuf;
use std::process;
use tracing::{error, info};

/// Minimal example agent demonstrating the monorepo agent layout
#[derive(Parser)]
#[command(name = "example-agent")]
#[command(about = "Minimal example agent demonstrating the monorepo agent layout")]
#[command(version)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Verbose logging
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the agent (the default when no subcommand is given)
    Run,
    /// Validate configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    // Environment files first so LOG_* variables from .env take effect.
    load_env_file();
    init_default_logging();

    info!("Starting example-agent v{}", env!("CARGO_PKG_VERSION"));

    let config = match load_configuration(&cli.config) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    let result = match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => run_agent(config),
        Commands::Config { show } => handle_config_command(config, show),
    };

    if let Err(e) = result {
        error!("Command failed: {}", e);
        process::exit(1);
    }

    info!("Application shutdown complete");
}

fn load_configuration(config_path: &Option<PathBuf>) -> AgentResult<AgentConfig> {
    match config_path {
        Some(path) => {
            info!("Loading configuration from: {}", path.display());
            Ok(AgentConfig::load_from_file(path)?)
        }
        None => {
            // Try default locations; fall back to built-in defaults.
            let default_paths = vec!["agent.toml", "config/agent.toml"];

            for path_str in default_paths {
                let path = PathBuf::from(path_str);
                if path.exists() {
                    info!("Loading configuration from: {}", path.display());
                    return Ok(AgentConfig::load_from_file(&path)?);
                }
            }

            info!("No configuration file found, using defaults");
            Ok(AgentConfig::default())
        }
    }
}

fn run_agent(config: AgentConfig) -> AgentResult<()> {
    let agent = Agent::new(config.agent.name);
    agent.run()
}

fn handle_config_command(config: AgentConfig, show: bool) -> AgentResult<()> {
    if show {
        println!("Current configuration:");
        println!("{}", toml::to_string_pretty(&config)?);
    }

    info!("Configuration validation complete");
    Ok(())
}
