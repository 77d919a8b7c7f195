//! Supporting records for the analytics reports.

use chrono::{DateTime, Utc};

pub const DEFAULT_MAX_CASHOUT_MULTIPLIER: f64 = 3.0;
pub const DEFAULT_MIN_CASHOUT_MULTIPLIER: f64 = 1.0;

/// Earning statuses that count as money paid to a referrer.
pub const PAID_EARNING_STATUSES: [&str; 3] = ["paid", "credited", "completed"];

/// Cashout limits as multiples of the amount deposited.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CashoutMultipliers {
    pub max: f64,
    pub min: f64,
}

impl CashoutMultipliers {
    pub fn from_entity(entity: entity::system_settings::Model) -> Self {
        Self {
            max: entity.max_cashout_multiplier,
            min: entity.min_cashout_multiplier,
        }
    }
}

impl Default for CashoutMultipliers {
    fn default() -> Self {
        Self {
            max: DEFAULT_MAX_CASHOUT_MULTIPLIER,
            min: DEFAULT_MIN_CASHOUT_MULTIPLIER,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReferralEarning {
    pub earning_id: String,
    pub referrer_user_id: String,
    pub referee_user_id: String,
    pub amount: f64,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl ReferralEarning {
    pub fn from_entity(entity: entity::referral_earning::Model) -> Self {
        Self {
            earning_id: entity.earning_id,
            referrer_user_id: entity.referrer_user_id,
            referee_user_id: entity.referee_user_id,
            amount: entity.amount,
            status: entity.status,
            created_at: entity.created_at,
        }
    }

    pub fn is_paid(&self) -> bool {
        PAID_EARNING_STATUSES.contains(&self.status.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Game {
    pub game_name: String,
    pub display_name: String,
    pub is_active: bool,
}

impl Game {
    pub fn from_entity(entity: entity::game::Model) -> Self {
        Self {
            game_name: entity.game_name,
            display_name: entity.display_name,
            is_active: entity.is_active,
        }
    }
}
