//! Database repository layer.
//!
//! Repositories use SeaORM entity models internally and return domain models so the
//! service layer never sees database types.

pub mod client_override;
pub mod game;
pub mod global_override;
pub mod order;
pub mod referral_earning;
pub mod settings;
pub mod tier;
pub mod user;

#[cfg(test)]
mod test;
