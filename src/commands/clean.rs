//! Batch cleaning handler

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::info;

use corpusprep::cli::OutputFormat;
use corpusprep::{clean_corpus, Batch, CleaningStats, Config, Corpus, Pipeline};

#[derive(Serialize)]
struct CleanOutput<'a> {
    stats: &'a CleaningStats,
    corpus: &'a Corpus,
}

/// Read a batch, process it, clean it, and print the corpus.
#[cfg(not(tarpaulin_include))]
pub fn handle(file: Option<&Path>, format: OutputFormat, config: &Config) -> Result<()> {
    let content = match file {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read batch file {}", path.display()))?,
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read batch from stdin")?;
            buf
        }
    };

    let batch = Batch::from_json(&content)?;
    info!(comments = batch.len(), "batch loaded");

    let pipeline = Pipeline::from_config(config);
    let (corpus, stats) = clean_corpus(pipeline.process_batch(batch.comments()));

    match format {
        OutputFormat::Text => {
            for text in corpus.texts() {
                println!("{}", text);
            }
            eprintln!("{}", stats);
        }
        OutputFormat::Json => {
            let output = CleanOutput {
                stats: &stats,
                corpus: &corpus,
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}
