//! Port traits for infrastructure boundaries.
//!
//! These are the ONLY abstractions in the engine. Everything else is concrete types.
//! Ports exist for:
//! - Player storage (in-process map or Neo4j)

mod error;
mod repos;
mod types;

// =============================================================================
// Repository Ports
// =============================================================================
pub use repos::PlayerRepo;
pub use types::WriteOutcome;

// =============================================================================
// Test-Only Mock Repositories (only available during test builds)
// =============================================================================
#[cfg(test)]
pub use repos::MockPlayerRepo;

// =============================================================================
// Error Types
// =============================================================================
pub use error::RepoError;
