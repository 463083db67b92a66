//! Trophy Manager command-line interface.
//!
//! Runs one command against the default trophies, or starts an interactive
//! shell when no subcommand is given.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin trophy -- sort year
//! cargo run --bin trophy
//! ```

use clap::Parser;
use trophy_cli::{Cli, Shell, run_once};
use trophy_core::InMemoryTrophyRepository;
use trophy_shared::setup_logger;

fn main() {
    let cli = Cli::parse();

    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), &cli.log_level);

    let mut repository = if cli.empty {
        InMemoryTrophyRepository::with_trophies(Vec::new())
    } else {
        InMemoryTrophyRepository::new()
    };

    let result = match &cli.command {
        Some(command) => {
            run_once(&mut repository, command, cli.json).map(|output| println!("{output}"))
        }
        None => Shell::new(repository, cli.json).run(),
    };

    if let Err(e) = result {
        tracing::error!("{}", e);
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
