//! Rucksack Engine library.
//!
//! This crate contains all server-side code for the inventory engine.
//!
//! ## Structure
//!
//! - `use_cases/` - Item actions and player reset, orchestrated over the store port
//! - `infrastructure/` - Store port plus in-memory and Neo4j adapters, config, correlation
//! - `api/` - HTTP entry points and the response translator
//! - `app` - Application composition

pub mod api;
pub mod app;
pub mod infrastructure;
pub mod use_cases;

/// Shared builders for unit and integration tests.
#[cfg(test)]
pub mod test_fixtures;

pub use app::App;
