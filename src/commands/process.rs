//! Single comment processing handler

use anyhow::Result;

use corpusprep::{Config, Pipeline, ProcessedComment};

/// Marker printed for a rejected comment.
const REJECTED_MARKER: &str = "<rejected>";

/// Run one comment through the pipeline and print the outcome.
///
/// A rejection is a normal outcome, not an error.
#[cfg(not(tarpaulin_include))]
pub fn handle(text: &str, config: &Config) -> Result<()> {
    let pipeline = Pipeline::from_config(config);
    match pipeline.process(text) {
        ProcessedComment::Accepted(processed) => println!("{}", processed),
        ProcessedComment::Rejected => println!("{}", REJECTED_MARKER),
    }
    Ok(())
}
