//! Platform account domain model.
//!
//! Accounts are owned by the account subsystem; this service reads them for referral
//! counting, access checks and balance analytics but never writes them.

use chrono::{DateTime, Utc};

pub const ROLE_ADMIN: &str = "admin";
pub const ROLE_USER: &str = "user";

#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub user_id: String,
    pub username: String,
    pub display_name: Option<String>,
    pub role: String,
    pub is_active: bool,
    pub referred_by_user_id: Option<String>,
    pub cash_balance: f64,
    pub bonus_balance: f64,
    pub play_credits: f64,
    pub total_deposited: f64,
    pub total_withdrawn: f64,
    pub withdraw_locked: bool,
    pub is_suspicious: bool,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            user_id: entity.user_id,
            username: entity.username,
            display_name: entity.display_name,
            role: entity.role,
            is_active: entity.is_active,
            referred_by_user_id: entity.referred_by_user_id,
            cash_balance: entity.cash_balance,
            bonus_balance: entity.bonus_balance,
            play_credits: entity.play_credits,
            total_deposited: entity.total_deposited,
            total_withdrawn: entity.total_withdrawn,
            withdraw_locked: entity.withdraw_locked,
            is_suspicious: entity.is_suspicious,
            created_at: entity.created_at,
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role == ROLE_ADMIN
    }

    /// Cash plus bonus, the balance a withdrawal could draw on.
    pub fn cash_and_bonus(&self) -> f64 {
        self.cash_balance + self.bonus_balance
    }

    pub fn combined_balance(&self) -> f64 {
        self.cash_balance + self.bonus_balance + self.play_credits
    }
}
