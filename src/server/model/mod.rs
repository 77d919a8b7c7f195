//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary and
//! transformed to DTOs at the controller boundary.

pub mod analytics;
pub mod bonus;
pub mod client_override;
pub mod global_override;
pub mod order;
pub mod tier;
pub mod user;
