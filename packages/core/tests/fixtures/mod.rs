//! Shared fixtures for integration tests.

use trophy_core::{InMemoryTrophyRepository, Trophy};

/// Fresh repository holding the default five trophies.
pub fn seeded_repository() -> InMemoryTrophyRepository {
    InMemoryTrophyRepository::new()
}

/// Build a trophy that is known to be valid.
pub fn trophy(id: i32, competition: &str, year: i32) -> Trophy {
    Trophy::new(id, competition, year).expect("fixture trophy must be valid")
}

/// Competition names of `trophies`, in order.
pub fn competitions<'a>(trophies: impl IntoIterator<Item = &'a Trophy>) -> Vec<&'a str> {
    trophies
        .into_iter()
        .map(|t| t.competition().as_str())
        .collect()
}
