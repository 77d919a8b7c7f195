//! Order factory.

use crate::factory::helpers::next_id;
use crate::fixture;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for orders.
///
/// Defaults come from `fixture::order::entity()` (an approved 100.0 deposit)
/// with a unique order id and the given owner.
pub struct OrderFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::order::Model,
}

impl<'a> OrderFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, user_id: impl Into<String>) -> Self {
        let entity = fixture::order::entity_builder()
            .order_id(format!("order_{}", next_id()))
            .user_id(user_id)
            .build();

        Self { db, entity }
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

    pub fn total_amount(mut self, total_amount: f64) -> Self {
        self.entity.total_amount = Some(total_amount);
        self
    }

    pub fn payout_amount(mut self, payout_amount: f64) -> Self {
        self.entity.payout_amount = Some(payout_amount);
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

    pub fn game(mut self, game_name: impl Into<String>) -> Self {
        self.entity.game_name = Some(game_name.into());
        self
    }

    /// Sets both `created_at` and `approved_at`.
    pub fn at(mut self, at: DateTime<Utc>) -> Self {
        self.entity.created_at = at;
        self.entity.approved_at = Some(at);
        self
    }

    /// Clears `approved_at`, as for orders still in review.
    pub fn unapproved(mut self) -> Self {
        self.entity.approved_at = None;
        self
    }

    /// Builds and inserts the order.
    pub async fn build(self) -> Result<entity::order::Model, DbErr> {
        let e = self.entity;
        entity::order::ActiveModel {
            order_id: ActiveValue::Set(e.order_id),
            user_id: ActiveValue::Set(e.user_id),
            order_type: ActiveValue::Set(e.order_type),
            status: ActiveValue::Set(e.status),
            amount: ActiveValue::Set(e.amount),
            total_amount: ActiveValue::Set(e.total_amount),
            payout_amount: ActiveValue::Set(e.payout_amount),
            bonus_amount: ActiveValue::Set(e.bonus_amount),
            bonus_consumed: ActiveValue::Set(e.bonus_consumed),
            void_amount: ActiveValue::Set(e.void_amount),
            game_name: ActiveValue::Set(e.game_name),
            created_at: ActiveValue::Set(e.created_at),
            approved_at: ActiveValue::Set(e.approved_at),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an approved order of `order_type` for `amount` at `at`.
pub async fn create_order(
    db: &DatabaseConnection,
    user_id: impl Into<String>,
    order_type: &str,
    amount: f64,
    at: DateTime<Utc>,
) -> Result<entity::order::Model, DbErr> {
    OrderFactory::new(db, user_id)
        .order_type(order_type)
        .amount(amount)
        .at(at)
        .build()
        .await
}
