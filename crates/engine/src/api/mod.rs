//! API layer - HTTP entry points.

pub mod http;
pub mod responses;


pub use http::{router, routes, ApiError};
