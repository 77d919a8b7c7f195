//! User data repository.
//!
//! Provides read-only access to platform accounts: session user lookup, the live
//! referral count and the client populations the analytics reports aggregate over.

use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::user::{User, ROLE_USER};

/// Repository providing read operations over platform accounts.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds a user by id.
    ///
    /// # Arguments
    /// - `user_id` - Platform user id
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, user_id: &str) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find_by_id(user_id.to_string())
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    /// Counts accounts whose `referred_by_user_id` is the given user.
    ///
    /// Always computed from the account table at query time, never cached.
    ///
    /// # Arguments
    /// - `user_id` - Referrer user id
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of referred accounts, zero when none
    /// - `Err(DbErr)` - Database error during count query
    pub async fn count_referrals(&self, user_id: &str) -> Result<u64, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::ReferredByUserId.eq(user_id))
            .count(self.db)
            .await
    }

    /// Counts referred accounts that are active and have deposited.
    ///
    /// Same base query as `count_referrals` with the activity predicate added.
    ///
    /// # Arguments
    /// - `user_id` - Referrer user id
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of active referred accounts
    /// - `Err(DbErr)` - Database error during count query
    pub async fn count_active_referrals(&self, user_id: &str) -> Result<u64, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::ReferredByUserId.eq(user_id))
            .filter(entity::user::Column::IsActive.eq(true))
            .filter(entity::user::Column::TotalDeposited.gt(0.0))
            .count(self.db)
            .await
    }

    /// Gets every active client account (role `user`).
    ///
    /// Admin accounts are excluded so operator balances never count as exposure.
    ///
    /// # Returns
    /// - `Ok(Vec<User>)` - Active clients, ordered by user id
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_active_clients(&self) -> Result<Vec<User>, DbErr> {
        let entities = entity::prelude::User::find()
            .filter(entity::user::Column::Role.eq(ROLE_USER))
            .filter(entity::user::Column::IsActive.eq(true))
            .order_by_asc(entity::user::Column::UserId)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(User::from_entity).collect())
    }

    /// Gets the client accounts (role `user`) among the given ids.
    ///
    /// # Arguments
    /// - `user_ids` - Ids to load; unknown ids are skipped
    ///
    /// # Returns
    /// - `Ok(Vec<User>)` - Matching client accounts (empty if `user_ids` is empty)
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_clients_by_ids(&self, user_ids: &[String]) -> Result<Vec<User>, DbErr> {
        if user_ids.is_empty() {
            return Ok(Vec::new());
        }

        let entities = entity::prelude::User::find()
            .filter(entity::user::Column::UserId.is_in(user_ids.iter().cloned()))
            .filter(entity::user::Column::Role.eq(ROLE_USER))
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(User::from_entity).collect())
    }
}
