//! Data transfer objects shared over the HTTP API.

pub mod analytics;
pub mod api;
pub mod bonus;
pub mod client_override;
pub mod global_override;
pub mod tier;
