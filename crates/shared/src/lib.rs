//! Rucksack Shared - wire types for the inventory HTTP API
//!
//! This crate contains the request and response bodies exchanged with clients:
//! - Request bodies (`{"itemId": ...}`, loose new-item payloads)
//! - Success payloads for use/discard/add/reset
//! - The `{"error": ...}` failure body
//!
//! # Design Principles
//!
//! 1. **Minimal dependencies** - Only serde, serde_json and the domain vocabulary
//! 2. **No business logic** - Pure data types, serialization and shape checks

pub mod requests;
pub mod responses;

pub use requests::{ItemActionRequest, NewItemData};
pub use responses::{ActionResponse, AddItemResponse, ErrorResponse, ResetResponse};
