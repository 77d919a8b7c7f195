//! Order domain model and the status/type vocabulary the reports filter on.

use chrono::{DateTime, Utc};

/// Statuses of orders whose money actually moved.
pub const APPROVED_STATUSES: [&str; 4] = ["approved", "APPROVED_EXECUTED", "completed", "paid"];

/// Terminal status of orders processed by the current payment pipeline.
pub const EXECUTED_STATUS: &str = "APPROVED_EXECUTED";

/// Withdrawal statuses still waiting on an operator.
pub const PENDING_WITHDRAWAL_STATUSES: [&str; 5] = [
    "pending_review",
    "awaiting_payment_proof",
    "pending",
    "initiated",
    "PENDING_REVIEW",
];

/// Every order type that brings money onto the platform.
pub const DEPOSIT_TYPES: [&str; 3] = ["game_load", "deposit", "wallet_load"];

/// Deposits that load a game and may carry a bonus.
pub const LOAD_TYPES: [&str; 2] = ["game_load", "deposit"];

/// Every order type that pays money out.
pub const WITHDRAWAL_TYPES: [&str; 3] = ["withdrawal_game", "withdrawal", "wallet_redeem"];

pub const ORDER_TYPE_DEPOSIT: &str = "deposit";
pub const ORDER_TYPE_WITHDRAWAL: &str = "withdrawal";

#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub order_id: String,
    pub user_id: String,
    pub order_type: String,
    pub status: String,
    pub amount: f64,
    pub total_amount: Option<f64>,
    pub payout_amount: Option<f64>,
    pub bonus_amount: f64,
    pub bonus_consumed: f64,
    pub void_amount: f64,
    pub game_name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub approved_at: Option<DateTime<Utc>>,
}

impl Order {
    pub fn from_entity(entity: entity::order::Model) -> Self {
        Self {
            order_id: entity.order_id,
            user_id: entity.user_id,
            order_type: entity.order_type,
            status: entity.status,
            amount: entity.amount,
            total_amount: entity.total_amount,
            payout_amount: entity.payout_amount,
            bonus_amount: entity.bonus_amount,
            bonus_consumed: entity.bonus_consumed,
            void_amount: entity.void_amount,
            game_name: entity.game_name,
            created_at: entity.created_at,
            approved_at: entity.approved_at,
        }
    }

    pub fn is_approved(&self) -> bool {
        APPROVED_STATUSES.contains(&self.status.as_str())
    }

    pub fn is_executed(&self) -> bool {
        self.status == EXECUTED_STATUS
    }

    pub fn is_deposit(&self) -> bool {
        DEPOSIT_TYPES.contains(&self.order_type.as_str())
    }

    pub fn is_load(&self) -> bool {
        LOAD_TYPES.contains(&self.order_type.as_str())
    }

    pub fn is_withdrawal(&self) -> bool {
        WITHDRAWAL_TYPES.contains(&self.order_type.as_str())
    }

    pub fn is_pending_withdrawal(&self) -> bool {
        self.is_withdrawal() && PENDING_WITHDRAWAL_STATUSES.contains(&self.status.as_str())
    }

    /// Executed `deposit` order, the only kind counted in per-game and per-client figures.
    pub fn is_executed_deposit(&self) -> bool {
        self.order_type == ORDER_TYPE_DEPOSIT && self.is_executed()
    }

    /// Executed `withdrawal` order, the only kind counted in per-game and per-client figures.
    pub fn is_executed_withdrawal(&self) -> bool {
        self.order_type == ORDER_TYPE_WITHDRAWAL && self.is_executed()
    }

    /// Amount paid out, falling back to the requested amount.
    pub fn paid_amount(&self) -> f64 {
        self.payout_amount.unwrap_or(self.amount)
    }

    /// Amount credited above what the player paid in, never negative.
    pub fn bonus_issued(&self) -> f64 {
        (self.total_amount.unwrap_or(self.amount) - self.amount).max(0.0)
    }

    /// Whether `approved_at` falls inside the inclusive range.
    pub fn approved_within(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> bool {
        self.approved_at.map_or(false, |approved_at| {
            start <= approved_at && approved_at <= end
        })
    }
}
