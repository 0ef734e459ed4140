//! Command-line interface definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::config::Config;
use crate::normalize::EmojiStrategy;

/// Normalize, validate and deduplicate social-media comments.
#[derive(Debug, Parser)]
#[command(name = "corpusprep", version, about)]
pub struct Cli {
    /// Log pipeline decisions at debug level (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Read settings from this file instead of the user config
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Process a single comment and print the result
    Process {
        /// The raw comment text
        text: String,

        #[command(flatten)]
        pipeline: PipelineArgs,
    },

    /// Process a JSON batch of comments and print the cleaned corpus
    Clean {
        /// Batch file (reads stdin when omitted)
        file: Option<PathBuf>,

        #[command(flatten)]
        pipeline: PipelineArgs,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Inspect or create the configuration
    #[command(subcommand)]
    Config(ConfigCommands),
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Show the effective configuration as TOML
    Show,
    /// Print the user config file path
    Path,
    /// Write a default config file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

/// Pipeline overrides shared by the processing commands.
#[derive(Debug, Clone, Default, Args)]
pub struct PipelineArgs {
    /// Emoji handling strategy
    #[arg(long, value_enum)]
    pub strategy: Option<EmojiStrategy>,

    /// Minimum accepted comment length in characters
    #[arg(long, value_name = "N")]
    pub min_length: Option<usize>,
}

impl PipelineArgs {
    /// Apply the overrides on top of a loaded config.
    pub fn apply(&self, mut config: Config) -> Config {
        if let Some(strategy) = self.strategy {
            config.pipeline.emoji_strategy = strategy;
        }
        if let Some(min_length) = self.min_length {
            config.pipeline.min_length = min_length;
        }
        config
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One comment per line
    Text,
    /// Corpus entries and statistics as JSON
    Json,
}
