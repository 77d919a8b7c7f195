//! Factory methods for creating test data.
//!
//! Each entity has a `Factory` builder for customization and a `create_*` shorthand
//! for default creation. Factories insert into the database and return the stored
//! entity model.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! factory::seed_default_tiers(db).await?;
//! let referrer = factory::create_user(db).await?;
//! let referee = factory::user::UserFactory::new(db)
//!     .referred_by(&referrer.user_id)
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Platform accounts, optionally referred by another account
//! - `referral_tier` - Tier bands, including the default five
//! - `global_override` - Time-bounded campaigns
//! - `client_override` - Per-user overrides
//! - `order` - Deposits, withdrawals and loads
//! - `referral_earning` - Earnings credited to referrers
//! - `game` - Games orders can be attributed to
//! - `settings` - The `global` system settings row
//! - `helpers` - Unique id generation and multi-entity helpers

pub mod client_override;
pub mod game;
pub mod global_override;
pub mod helpers;
pub mod order;
pub mod referral_earning;
pub mod referral_tier;
pub mod settings;
pub mod user;

pub use client_override::create_client_override;
pub use game::create_game;
pub use global_override::create_global_override;
pub use order::create_order;
pub use referral_earning::create_referral_earning;
pub use referral_tier::{create_tier, seed_default_tiers};
pub use settings::create_settings;
pub use user::{create_referrals, create_user, create_user_with_id};
