//! CLI error definitions.

use thiserror::Error;
use trophy_core::{
    ErrorKind, RepositoryError,
    usecase::{AddTrophyError, RemoveTrophyError, UpdateTrophyError},
};

/// Errors surfaced by the `trophy` binary
#[derive(Debug, Error)]
pub enum CliError {
    /// Lookup of an unknown id
    #[error(transparent)]
    NotFound(#[from] RepositoryError),

    #[error(transparent)]
    Add(#[from] AddTrophyError),

    #[error(transparent)]
    Update(#[from] UpdateTrophyError),

    #[error(transparent)]
    Remove(#[from] RemoveTrophyError),

    /// JSON output could not be produced
    #[error("Failed to serialize output: {0}")]
    Json(#[from] serde_json::Error),

    /// Terminal line editor failure
    #[error("Line editor error: {0}")]
    Readline(#[from] rustyline::error::ReadlineError),
}

impl CliError {
    /// Domain error kind, if this error came from the trophy collection
    pub fn kind(&self) -> Option<ErrorKind> {
        match self {
            CliError::NotFound(e) => Some(e.kind()),
            CliError::Add(e) => Some(e.kind()),
            CliError::Update(e) => Some(e.kind()),
            CliError::Remove(e) => Some(e.kind()),
            CliError::Json(_) | CliError::Readline(_) => None,
        }
    }
}
