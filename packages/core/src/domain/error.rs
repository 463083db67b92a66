//! Domain layer error definitions.

use std::fmt;

use thiserror::Error;

use super::value_object::TrophyId;

/// Coarse classification shared by every error in this crate.
///
/// Callers that only need to tell a bad argument from a bad year can branch on
/// this instead of matching individual variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Bad field value or unknown identifier
    InvalidArgument,
    /// Year outside the accepted range
    OutOfRange,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::InvalidArgument => write!(f, "invalid argument"),
            ErrorKind::OutOfRange => write!(f, "out of range"),
        }
    }
}

/// Errors related to Value Objects validation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueObjectError {
    /// Competition is empty or whitespace only
    #[error("Competition name cannot be empty or whitespace")]
    CompetitionEmpty,

    /// Competition too short error
    #[error("Competition name must be at least {min} characters long (got {actual})")]
    CompetitionTooShort { min: usize, actual: usize },

    /// Year outside (1970, 2025)
    #[error("Year must be between 1971 and 2024 (got {year})")]
    YearOutOfRange { year: i32 },
}

impl ValueObjectError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ValueObjectError::CompetitionEmpty | ValueObjectError::CompetitionTooShort { .. } => {
                ErrorKind::InvalidArgument
            }
            ValueObjectError::YearOutOfRange { .. } => ErrorKind::OutOfRange,
        }
    }
}

/// Errors related to repository lookups
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// No trophy with the given id
    #[error("No trophy found with ID {0}")]
    TrophyNotFound(TrophyId),
}

impl RepositoryError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            RepositoryError::TrophyNotFound(_) => ErrorKind::InvalidArgument,
        }
    }
}
