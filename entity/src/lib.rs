//! SeaORM entities for every table the bonusdesk service reads or writes.

pub mod prelude;

pub mod game;
pub mod order;
pub mod referral_client_override;
pub mod referral_earning;
pub mod referral_global_override;
pub mod referral_tier;
pub mod system_settings;
pub mod user;
