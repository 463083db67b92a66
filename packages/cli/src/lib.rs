//! Command-line front end for the trophy collection.
//!
//! Provides one-shot subcommands and an interactive shell on top of
//! `trophy-core`.

pub mod cli;
pub mod error;
pub mod handler;
pub mod shell;

use trophy_core::TrophyRepository;

pub use cli::{Cli, TrophyCommand};
pub use error::CliError;
pub use shell::Shell;

/// Execute a single command and return its rendered output.
pub fn run_once(
    repository: &mut dyn TrophyRepository,
    command: &TrophyCommand,
    json: bool,
) -> Result<String, CliError> {
    let output = handler::execute(repository, command)?;
    handler::render(&output, json)
}
