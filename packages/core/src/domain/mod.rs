//! Domain layer for the trophy collection.
//!
//! This module contains business logic that is independent of
//! storage and front-end concerns.

pub mod entity;
pub mod error;
pub mod repository;
pub mod seed;
pub mod value_object;

pub use entity::Trophy;
pub use error::{ErrorKind, RepositoryError, ValueObjectError};
pub use repository::{SortCriterion, TrophyRepository};
pub use seed::default_trophies;
pub use value_object::{Competition, TrophyId, Year};
