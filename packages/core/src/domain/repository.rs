//! Trophy Repository trait
//!
//! The domain defines the operations it needs; the infrastructure layer
//! provides the implementation (dependency inversion).

use super::{
    entity::Trophy,
    error::RepositoryError,
    value_object::TrophyId,
};

/// Field used to order trophies in [`TrophyRepository::get_sorted`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortCriterion {
    /// Ascending by competition name
    Competition,
    /// Ascending by year
    Year,
}

impl SortCriterion {
    /// Parse a criterion case-insensitively.
    ///
    /// Returns `None` for anything other than `"competition"` or `"year"`.
    pub fn parse(value: &str) -> Option<Self> {
        if value.eq_ignore_ascii_case("competition") {
            Some(SortCriterion::Competition)
        } else if value.eq_ignore_ascii_case("year") {
            Some(SortCriterion::Year)
        } else {
            None
        }
    }
}

/// Ordered collection of trophies.
///
/// Insertion order is kept. Ids are not required to be unique; lookups by id
/// act on the first match.
pub trait TrophyRepository {
    /// All trophies in current order
    fn get(&self) -> &[Trophy];

    /// Trophies won in `year`, in current order
    fn get_filtered_by_year(&self, year: i32) -> Vec<&Trophy> {
        self.get()
            .iter()
            .filter(|t| t.year().value() == year)
            .collect()
    }

    /// Trophies ordered by `criterion` (case-insensitive `"competition"` or `"year"`).
    ///
    /// Any other criterion returns the trophies in current order. Ties keep
    /// their relative order.
    fn get_sorted(&self, criterion: &str) -> Vec<&Trophy> {
        let mut trophies: Vec<&Trophy> = self.get().iter().collect();
        match SortCriterion::parse(criterion) {
            Some(SortCriterion::Competition) => {
                trophies.sort_by(|a, b| a.competition().cmp(b.competition()))
            }
            Some(SortCriterion::Year) => trophies.sort_by_key(|t| t.year()),
            None => {}
        }
        trophies
    }

    /// First trophy with `id`
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::TrophyNotFound` if no trophy has this id
    fn get_by_id(&self, id: TrophyId) -> Result<&Trophy, RepositoryError> {
        self.get()
            .iter()
            .find(|t| t.id() == id)
            .ok_or(RepositoryError::TrophyNotFound(id))
    }

    /// Append `trophy` and return the stored entry
    fn add(&mut self, trophy: Trophy) -> &Trophy;

    /// Remove the first trophy with `id` and return it
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::TrophyNotFound` if no trophy has this id
    fn remove(&mut self, id: TrophyId) -> Result<Trophy, RepositoryError>;

    /// Copy competition and year of `updated` onto the first trophy with `id`.
    ///
    /// The stored trophy keeps its id.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::TrophyNotFound` if no trophy has this id
    fn update(&mut self, id: TrophyId, updated: &Trophy) -> Result<&Trophy, RepositoryError>;

    fn len(&self) -> usize {
        self.get().len()
    }

    fn is_empty(&self) -> bool {
        self.get().is_empty()
    }
}
