//! Core domain models for the trophy collection.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{
    error::ValueObjectError,
    value_object::{Competition, TrophyId, Year},
};

/// A competition won in a given year.
///
/// Fields are private so every change to `competition` or `year` goes through
/// validation. A failed setter leaves the previous value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trophy {
    /// Trophy identifier
    id: TrophyId,
    /// Name of the competition
    competition: Competition,
    /// Year the competition was won
    year: Year,
}

impl Trophy {
    /// Create a new trophy from raw values
    ///
    /// # Errors
    ///
    /// Returns `ValueObjectError::CompetitionEmpty` or
    /// `ValueObjectError::CompetitionTooShort` for a bad competition name, and
    /// `ValueObjectError::YearOutOfRange` for a year outside (1970, 2025)
    pub fn new(
        id: i32,
        competition: impl Into<String>,
        year: i32,
    ) -> Result<Self, ValueObjectError> {
        Ok(Self::from_parts(
            TrophyId::new(id),
            Competition::new(competition)?,
            Year::new(year)?,
        ))
    }

    /// Create a new trophy from already validated value objects
    pub fn from_parts(id: TrophyId, competition: Competition, year: Year) -> Self {
        Self {
            id,
            competition,
            year,
        }
    }

    pub fn id(&self) -> TrophyId {
        self.id
    }

    pub fn competition(&self) -> &Competition {
        &self.competition
    }

    pub fn year(&self) -> Year {
        self.year
    }

    pub fn set_id(&mut self, id: impl Into<TrophyId>) {
        self.id = id.into();
    }

    /// Replace the competition name after validating it
    pub fn set_competition(
        &mut self,
        competition: impl Into<String>,
    ) -> Result<(), ValueObjectError> {
        self.competition = Competition::new(competition)?;
        Ok(())
    }

    /// Replace the year after validating it
    pub fn set_year(&mut self, year: i32) -> Result<(), ValueObjectError> {
        self.year = Year::new(year)?;
        Ok(())
    }

    /// Copy competition and year from `other`, keeping this trophy's id
    pub fn apply_details(&mut self, other: &Trophy) {
        self.competition = other.competition.clone();
        self.year = other.year;
    }
}

impl fmt::Display for Trophy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Trophy ID: {}, Competition: {} ({})",
            self.id, self.competition, self.year
        )
    }
}
