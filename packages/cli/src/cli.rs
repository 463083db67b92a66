//! Command-line arguments and shell commands.

use clap::{Parser, Subcommand};

/// Manage an in-memory collection of trophies.
///
/// Without a subcommand an interactive shell is started.
#[derive(Debug, Parser)]
#[command(name = "trophy", version)]
pub struct Cli {
    /// Log level used when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Print trophies as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Start with an empty collection instead of the default trophies
    #[arg(long)]
    pub empty: bool,

    #[command(subcommand)]
    pub command: Option<TrophyCommand>,
}

/// Operations on the trophy collection.
#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum TrophyCommand {
    /// List all trophies in insertion order
    List,
    /// List trophies won in YEAR
    Filter {
        #[arg(allow_negative_numbers = true)]
        year: i32,
    },
    /// List trophies ordered by CRITERION ("competition" or "year")
    Sort { criterion: String },
    /// Show the first trophy with ID
    Get {
        #[arg(allow_negative_numbers = true)]
        id: i32,
    },
    /// Add a trophy
    Add {
        #[arg(allow_negative_numbers = true)]
        id: i32,
        #[arg(allow_negative_numbers = true)]
        year: i32,
        /// Competition name, may span several words
        #[arg(required = true, num_args = 1..)]
        competition: Vec<String>,
    },
    /// Remove the first trophy with ID
    Remove {
        #[arg(allow_negative_numbers = true)]
        id: i32,
    },
    /// Replace competition and year of the first trophy with ID
    Update {
        #[arg(allow_negative_numbers = true)]
        id: i32,
        #[arg(allow_negative_numbers = true)]
        year: i32,
        /// Competition name, may span several words
        #[arg(required = true, num_args = 1..)]
        competition: Vec<String>,
    },
}

/// One line typed into the interactive shell.
#[derive(Debug, Parser)]
#[command(name = "trophy>", no_binary_name = true, disable_version_flag = true)]
pub struct ShellLine {
    #[command(subcommand)]
    pub command: ShellCommand,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum ShellCommand {
    #[command(flatten)]
    Trophy(TrophyCommand),
    /// Leave the shell
    #[command(alias = "quit")]
    Exit,
}

impl ShellLine {
    /// Parse a shell line split on whitespace.
    pub fn parse_line(line: &str) -> Result<ShellCommand, clap::Error> {
        Self::try_parse_from(line.split_whitespace()).map(|parsed| parsed.command)
    }
}
