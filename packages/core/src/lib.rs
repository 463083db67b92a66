//! Trophy collection library.
//!
//! Validated trophy records and an in-memory, insertion-ordered repository
//! with list, filter, sort, lookup, add, remove and update operations.
//!
//! ```
//! use trophy_core::{InMemoryTrophyRepository, Trophy, TrophyId, TrophyRepository};
//!
//! let mut repository = InMemoryTrophyRepository::new();
//! repository.add(Trophy::new(6, "Bundesliga", 2023).unwrap());
//!
//! assert_eq!(repository.len(), 6);
//! assert_eq!(
//!     repository.get_by_id(TrophyId::new(6)).unwrap().to_string(),
//!     "Trophy ID: 6, Competition: Bundesliga (2023)"
//! );
//! ```

pub mod domain;
pub mod infrastructure;
pub mod usecase;

pub use domain::{
    Competition, ErrorKind, RepositoryError, SortCriterion, Trophy, TrophyId, TrophyRepository,
    ValueObjectError, Year,
};
pub use infrastructure::repository::InMemoryTrophyRepository;
