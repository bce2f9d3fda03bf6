//! Neo4j database implementations.

mod helpers;
mod player_repo;
mod schema;

pub use player_repo::Neo4jPlayerRepo;
pub use schema::ensure_schema;

#[cfg(test)]
mod test_harness;

#[cfg(test)]
mod integration_tests;
