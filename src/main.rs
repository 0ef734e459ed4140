//! corpusprep command-line entry point.

mod commands;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use corpusprep::cli::{Cli, Commands, ConfigCommands};
use corpusprep::Config;

/// Install the stderr log subscriber. `RUST_LOG` wins over `--verbose`.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn load_config(cli: &Cli) -> Result<Config> {
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    Ok(config)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match &cli.command {
        Commands::Process { text, pipeline } => {
            let config = pipeline.apply(load_config(&cli)?);
            config.validate()?;
            commands::process::handle(text, &config)
        }
        Commands::Clean {
            file,
            pipeline,
            format,
        } => {
            let config = pipeline.apply(load_config(&cli)?);
            config.validate()?;
            commands::clean::handle(file.as_deref(), *format, &config)
        }
        Commands::Config(ConfigCommands::Show) => {
            commands::config::handle_show(&load_config(&cli)?)
        }
        Commands::Config(ConfigCommands::Path) => commands::config::handle_path(),
        Commands::Config(ConfigCommands::Init { force }) => {
            commands::config::handle_init(cli.config.as_deref(), *force)
        }
    }
}
