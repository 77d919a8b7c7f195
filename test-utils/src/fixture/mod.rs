//! Test fixtures providing reusable test data without database insertion.
//!
//! Fixtures build in-memory entity models. Factories use them as their defaults.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! let deposit = fixture::order::entity_builder()
//!     .order_type("deposit")
//!     .amount(100.0)
//!     .build();
//! ```

pub mod order;
pub mod referral_tier;
pub mod user;

pub use order::{entity as order_entity, entity_builder as order_entity_builder};
pub use referral_tier::default_tiers;
pub use user::{entity as user_entity, entity_builder as user_entity_builder};
