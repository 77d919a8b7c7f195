//! User factory for creating test user entities.

use crate::factory::helpers::next_id;
use crate::fixture;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test users with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::user::UserFactory;
///
/// let admin = UserFactory::new(&db)
///     .role("admin")
///     .build()
///     .await?;
/// ```
pub struct UserFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::user::Model,
}

impl<'a> UserFactory<'a> {
    /// Creates a new UserFactory with default values.
    ///
    /// Defaults come from `fixture::user::entity()` with a unique
    /// `user_id` (`"user_{id}"`) and username (`"player{id}"`).
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        let entity = fixture::user::entity_builder()
            .user_id(format!("user_{}", id))
            .username(format!("player{}", id))
            .build();

        Self { db, entity }
    }

    pub fn user_id(mut self, user_id: impl Into<String>) -> Self {
        self.entity.user_id = user_id.into();
        self
    }

    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.entity.username = username.into();
        self
    }

    pub fn display_name(mut self, display_name: impl Into<String>) -> Self {
        self.entity.display_name = Some(display_name.into());
        self
    }

    /// Sets the role, `"user"` or `"admin"`.
    pub fn role(mut self, role: impl Into<String>) -> Self {
        self.entity.role = role.into();
        self
    }

    /// Shorthand for `role("admin")`.
    pub fn admin(self) -> Self {
        self.role("admin")
    }

    pub fn is_active(mut self, is_active: bool) -> Self {
        self.entity.is_active = is_active;
        self
    }

    /// Links the user to the account that referred them.
    pub fn referred_by(mut self, referrer_id: impl Into<String>) -> Self {
        self.entity.referred_by_user_id = Some(referrer_id.into());
        self
    }

    /// Sets cash, bonus and play credit balances.
    pub fn balances(mut self, cash: f64, bonus: f64, play_credits: f64) -> Self {
        self.entity.cash_balance = cash;
        self.entity.bonus_balance = bonus;
        self.entity.play_credits = play_credits;
        self
    }

    /// Sets lifetime deposited and withdrawn totals.
    pub fn totals(mut self, deposited: f64, withdrawn: f64) -> Self {
        self.entity.total_deposited = deposited;
        self.entity.total_withdrawn = withdrawn;
        self
    }

    pub fn withdraw_locked(mut self, locked: bool) -> Self {
        self.entity.withdraw_locked = locked;
        self
    }

    pub fn is_suspicious(mut self, suspicious: bool) -> Self {
        self.entity.is_suspicious = suspicious;
        self
    }

    /// Builds and inserts the user entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::user::Model)` - Created user entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::user::Model, DbErr> {
        let e = self.entity;
        entity::user::ActiveModel {
            user_id: ActiveValue::Set(e.user_id),
            username: ActiveValue::Set(e.username),
            display_name: ActiveValue::Set(e.display_name),
            role: ActiveValue::Set(e.role),
            is_active: ActiveValue::Set(e.is_active),
            referred_by_user_id: ActiveValue::Set(e.referred_by_user_id),
            cash_balance: ActiveValue::Set(e.cash_balance),
            bonus_balance: ActiveValue::Set(e.bonus_balance),
            play_credits: ActiveValue::Set(e.play_credits),
            total_deposited: ActiveValue::Set(e.total_deposited),
            total_withdrawn: ActiveValue::Set(e.total_withdrawn),
            withdraw_locked: ActiveValue::Set(e.withdraw_locked),
            is_suspicious: ActiveValue::Set(e.is_suspicious),
            created_at: ActiveValue::Set(e.created_at),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a user with default values.
///
/// Shorthand for `UserFactory::new(db).build().await`.
pub async fn create_user(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).build().await
}

/// Creates a user with a specific id.
///
/// Shorthand for `UserFactory::new(db).user_id(user_id).build().await`.
pub async fn create_user_with_id(
    db: &DatabaseConnection,
    user_id: impl Into<String>,
) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).user_id(user_id).build().await
}

/// Creates `count` default users all referred by `referrer_id`.
///
/// # Returns
/// - `Ok(Vec<entity::user::Model>)` - The referred accounts
/// - `Err(DbErr)` - Database error during insert
pub async fn create_referrals(
    db: &DatabaseConnection,
    referrer_id: &str,
    count: usize,
) -> Result<Vec<entity::user::Model>, DbErr> {
    let mut referrals = Vec::with_capacity(count);
    for _ in 0..count {
        referrals.push(
            UserFactory::new(db)
                .referred_by(referrer_id)
                .build()
                .await?,
        );
    }
    Ok(referrals)
}
