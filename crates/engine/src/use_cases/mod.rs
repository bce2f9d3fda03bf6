//! Use cases - user story orchestration.
//!
//! Use cases coordinate the domain rules and the player store to fulfill
//! a request. Each use case is a concrete struct holding its ports.

pub mod inventory;
pub mod player;

pub use inventory::InventoryUseCases;
pub use player::PlayerUseCases;
