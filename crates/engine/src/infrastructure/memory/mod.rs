//! In-process store implementations.

mod player_repo;

pub use player_repo::InMemoryPlayerRepo;
