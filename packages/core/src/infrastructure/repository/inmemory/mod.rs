//! InMemory Repository 実装

mod trophy;

pub use trophy::InMemoryTrophyRepository;
