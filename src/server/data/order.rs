//! Order data repository.
//!
//! Orders are written by the payment pipeline; the analytics reports only read them.
//! Each query narrows rows in SQL by status, type or time so the reports fold over
//! the relevant slice only.

use chrono::{DateTime, Utc};
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder, Select,
};

use crate::server::model::order::{
    Order, APPROVED_STATUSES, EXECUTED_STATUS, PENDING_WITHDRAWAL_STATUSES, WITHDRAWAL_TYPES,
};

/// Repository providing read operations over orders.
pub struct OrderRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> OrderRepository<'a> {
    /// Creates a new OrderRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `OrderRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    async fn fetch(&self, query: Select<entity::prelude::Order>) -> Result<Vec<Order>, DbErr> {
        let entities = query
            .order_by_asc(entity::order::Column::CreatedAt)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Order::from_entity).collect())
    }

    /// Gets approved orders whose `approved_at` lies in `[start, end]`.
    ///
    /// # Arguments
    /// - `start` - Inclusive range start
    /// - `end` - Inclusive range end
    ///
    /// # Returns
    /// - `Ok(Vec<Order>)` - Approved orders in range, any type
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_approved_between(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<Order>, DbErr> {
        self.fetch(
            entity::prelude::Order::find()
                .filter(entity::order::Column::Status.is_in(APPROVED_STATUSES))
                .filter(entity::order::Column::ApprovedAt.gte(start))
                .filter(entity::order::Column::ApprovedAt.lte(end)),
        )
        .await
    }

    /// Gets withdrawals still waiting on an operator.
    pub async fn get_pending_withdrawals(&self) -> Result<Vec<Order>, DbErr> {
        self.fetch(
            entity::prelude::Order::find()
                .filter(entity::order::Column::OrderType.is_in(WITHDRAWAL_TYPES))
                .filter(entity::order::Column::Status.is_in(PENDING_WITHDRAWAL_STATUSES)),
        )
        .await
    }

    /// Gets every `APPROVED_EXECUTED` order.
    pub async fn get_executed(&self) -> Result<Vec<Order>, DbErr> {
        self.fetch(
            entity::prelude::Order::find()
                .filter(entity::order::Column::Status.eq(EXECUTED_STATUS)),
        )
        .await
    }

    /// Gets every order attached to a game, any status.
    pub async fn get_with_game(&self) -> Result<Vec<Order>, DbErr> {
        self.fetch(
            entity::prelude::Order::find().filter(entity::order::Column::GameName.is_not_null()),
        )
        .await
    }

    /// Gets every order for one game, any status.
    pub async fn get_by_game(&self, game_name: &str) -> Result<Vec<Order>, DbErr> {
        self.fetch(
            entity::prelude::Order::find().filter(entity::order::Column::GameName.eq(game_name)),
        )
        .await
    }

    /// Gets every order placed by one user, any status.
    pub async fn get_by_user(&self, user_id: &str) -> Result<Vec<Order>, DbErr> {
        self.fetch(entity::prelude::Order::find().filter(entity::order::Column::UserId.eq(user_id)))
            .await
    }

    /// Gets `APPROVED_EXECUTED` orders created at or after `since`.
    pub async fn get_executed_created_since(
        &self,
        since: DateTime<Utc>,
    ) -> Result<Vec<Order>, DbErr> {
        self.fetch(
            entity::prelude::Order::find()
                .filter(entity::order::Column::Status.eq(EXECUTED_STATUS))
                .filter(entity::order::Column::CreatedAt.gte(since)),
        )
        .await
    }

    /// Gets `APPROVED_EXECUTED` orders approved at or after `since`.
    pub async fn get_executed_approved_since(
        &self,
        since: DateTime<Utc>,
    ) -> Result<Vec<Order>, DbErr> {
        self.fetch(
            entity::prelude::Order::find()
                .filter(entity::order::Column::Status.eq(EXECUTED_STATUS))
                .filter(entity::order::Column::ApprovedAt.gte(since)),
        )
        .await
    }
}
