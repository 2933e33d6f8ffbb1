//! Command-line arguments.

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use tracing::Level;

#[derive(Debug, Parser)]
#[command(name = "parsely", version, about = "Describe and check agent tool schemas")]
pub struct Cli {
    /// Set the log level to INFO (repeat for DEBUG)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Set the log level to DEBUG
    #[arg(long, global = true)]
    pub very_verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the JSON found in a markdown ```json fence, or the whole input
    Extract {
        /// Input file, or `-` for stdin
        input: PathBuf,
    },
    /// Validate function descriptors and print them as plain data
    Check {
        /// Input file, or `-` for stdin
        input: PathBuf,
    },
}

impl Cli {
    /// WARN unless raised by `-v` (INFO) or `-vv`/`--very-verbose` (DEBUG).
    pub fn log_level(&self) -> Level {
        if self.very_verbose || self.verbose >= 2 {
            Level::DEBUG
        } else if self.verbose == 1 {
            Level::INFO
        } else {
            Level::WARN
        }
    }
}
