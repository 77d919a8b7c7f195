//! Service layer for business logic and orchestration.
//!
//! Services sit between the controllers and the repositories. They validate params,
//! apply the bonus precedence rules and fold report data, working with domain models
//! rather than DTOs or entity models.

pub mod analytics;
pub mod bonus;
pub mod client_override;
pub mod global_override;
pub mod tier;
