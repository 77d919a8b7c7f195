//! Bonusdesk Test Utils
//!
//! Shared testing utilities for the bonusdesk service. Tests build an in-memory SQLite
//! database holding only the tables they need, then seed it through factories.
//!
//! # Overview
//!
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing database connection and session
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Insert entities with sensible defaults
//! - **fixture**: In-memory entity models the factories use as defaults
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn resolves_tier_bonus() -> Result<(), sea_orm::DbErr> {
//!     let test = TestBuilder::new()
//!         .with_referral_tables()
//!         .build()
//!         .await
//!         .unwrap();
//!     let db = test.db.as_ref().unwrap();
//!
//!     factory::seed_default_tiers(db).await?;
//!     let user = factory::create_user(db).await?;
//!     // Perform resolution...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod fixture;
