//! Command-line arguments

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Build static sites from stanza templates
#[derive(Debug, Parser)]
#[command(name = "stanza", version, about)]
pub struct Cli {
    /// Log at debug level (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Render templates, content and pages into the output directory
    Build {
        /// Site configuration file
        #[arg(short, long, default_value = "stanza.json")]
        config: PathBuf,

        /// Evaluate everything but write nothing
        #[arg(long)]
        dry_run: bool,
    },
}
