//! Default dataset for a freshly created repository.

use super::entity::Trophy;

/// `(id, competition, year)` of the default trophies, in insertion order
pub const DEFAULT_TROPHIES: [(i32, &str, i32); 5] = [
    (1, "Champions League", 2020),
    (2, "Premier League", 2019),
    (3, "FA Cup", 2018),
    (4, "La Liga", 2021),
    (5, "Serie A", 2022),
];

/// Build the default trophies.
pub fn default_trophies() -> Vec<Trophy> {
    DEFAULT_TROPHIES
        .iter()
        .map(|&(id, competition, year)| {
            // Constant input, covered by test_default_trophies_are_valid
            Trophy::new(id, competition, year).expect("default trophy must pass validation")
        })
        .collect()
}
