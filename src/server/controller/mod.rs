//! HTTP request handlers.
//!
//! Controllers check access through `AuthGuard`, convert DTOs to params, call the
//! service layer and convert the result back to DTOs. Each handler carries a
//! `utoipa::path` annotation picked up by the router.

pub mod analytics;
pub mod bonus;
pub mod client_override;
pub mod global_override;
pub mod tier;
