//! Order fixtures for creating in-memory test data.

use chrono::{DateTime, TimeZone, Utc};
use entity::order;

/// Creates an approved `deposit` order of 100.0 for `user-1` with no bonus.
///
/// `created_at` and `approved_at` are both 2026-01-01 12:00 UTC.
///
/// # Returns
/// - `order::Model` - In-memory order entity
pub fn entity() -> order::Model {
    let at = Utc.with_ymd_and_hms(2026, 1, 1, 12, 0, 0).unwrap();

    order::Model {
        order_id: "order-1".to_string(),
        user_id: "user-1".to_string(),
        order_type: "deposit".to_string(),
        status: "APPROVED_EXECUTED".to_string(),
        amount: 100.0,
        total_amount: None,
        payout_amount: None,
        bonus_amount: 0.0,
        bonus_consumed: 0.0,
        void_amount: 0.0,
        game_name: None,
        created_at: at,
        approved_at: Some(at),
    }
}

/// Creates an order entity builder for customization.
pub fn entity_builder() -> OrderEntityBuilder {
    OrderEntityBuilder { entity: entity() }
}

/// Builder for in-memory order entity models.
pub struct OrderEntityBuilder {
    entity: order::Model,
}

impl OrderEntityBuilder {
    pub fn order_id(mut self, order_id: impl Into<String>) -> Self {
        self.entity.order_id = order_id.into();
        self
    }

    pub fn user_id(mut self, user_id: impl Into<String>) -> Self {
        self.entity.user_id = user_id.into();
        self
    }

    pub fn order_type(mut self, order_type: impl Into<String>) -> Self {
        self.entity.order_type = order_type.into();
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.entity.status = status.into();
        self
    }

    pub fn amount(mut self, amount: f64) -> Self {
        self.entity.amount = amount;
        self
    }

    pub fn total_amount(mut self, total_amount: Option<f64>) -> Self {
        self.entity.total_amount = total_amount;
        self
    }

    pub fn payout_amount(mut self, payout_amount: Option<f64>) -> Self {
        self.entity.payout_amount = payout_amount;
        self
    }

    pub fn bonus_amount(mut self, bonus_amount: f64) -> Self {
        self.entity.bonus_amount = bonus_amount;
        self
    }

    pub fn bonus_consumed(mut self, bonus_consumed: f64) -> Self {
        self.entity.bonus_consumed = bonus_consumed;
        self
    }

    pub fn void_amount(mut self, void_amount: f64) -> Self {
        self.entity.void_amount = void_amount;
        self
    }

    pub fn game_name(mut self, game_name: Option<String>) -> Self {
        self.entity.game_name = game_name;
        self
    }

    /// Sets both `created_at` and `approved_at`.
    pub fn at(mut self, at: DateTime<Utc>) -> Self {
        self.entity.created_at = at;
        self.entity.approved_at = Some(at);
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.entity.created_at = created_at;
        self
    }

    pub fn approved_at(mut self, approved_at: Option<DateTime<Utc>>) -> Self {
        self.entity.approved_at = approved_at;
        self
    }

    pub fn build(self) -> order::Model {
        self.entity
    }
}
