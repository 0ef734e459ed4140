//! Subcommand handlers.

pub mod clean;
pub mod config;
pub mod process;
