//! Client override data repository.
//!
//! At most one override exists per user; creating a second one replaces the first.

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::server::model::client_override::{
    ClientOverride, ClientOverrideEntry, PatchClientOverrideParams, UpsertClientOverrideParams,
};

/// Repository providing database operations for per-user overrides.
pub struct ClientOverrideRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ClientOverrideRepository<'a> {
    /// Creates a new ClientOverrideRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `ClientOverrideRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds the user's override if it is active and unexpired at `at`.
    ///
    /// An override whose `expires_at` equals `at` is already expired.
    ///
    /// # Arguments
    /// - `user_id` - Overridden user
    /// - `at` - Instant to evaluate expiry against
    ///
    /// # Returns
    /// - `Ok(Some(ClientOverride))` - Override in effect
    /// - `Ok(None)` - No override, or it is inactive or expired
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_active_for_user(
        &self,
        user_id: &str,
        at: DateTime<Utc>,
    ) -> Result<Option<ClientOverride>, DbErr> {
        let entity = entity::prelude::ReferralClientOverride::find()
            .filter(entity::referral_client_override::Column::UserId.eq(user_id))
            .filter(entity::referral_client_override::Column::IsActive.eq(true))
            .filter(
                Condition::any()
                    .add(entity::referral_client_override::Column::ExpiresAt.is_null())
                    .add(entity::referral_client_override::Column::ExpiresAt.gt(at)),
            )
            .one(self.db)
            .await?;

        Ok(entity.map(ClientOverride::from_entity))
    }

    /// Finds the user's override regardless of state.
    pub async fn find_by_user(&self, user_id: &str) -> Result<Option<ClientOverride>, DbErr> {
        let entity = entity::prelude::ReferralClientOverride::find()
            .filter(entity::referral_client_override::Column::UserId.eq(user_id))
            .one(self.db)
            .await?;

        Ok(entity.map(ClientOverride::from_entity))
    }

    /// Gets every override joined with the overridden user, newest first.
    ///
    /// # Returns
    /// - `Ok(Vec<ClientOverrideEntry>)` - Overrides with username and display name
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_all_with_users(&self) -> Result<Vec<ClientOverrideEntry>, DbErr> {
        let rows = entity::prelude::ReferralClientOverride::find()
            .find_also_related(entity::prelude::User)
            .order_by_desc(entity::referral_client_override::Column::CreatedAt)
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(client_override, user)| {
                let (username, display_name) = match user {
                    Some(user) => (Some(user.username), user.display_name),
                    None => (None, None),
                };

                ClientOverrideEntry {
                    client_override: ClientOverride::from_entity(client_override),
                    username,
                    display_name,
                }
            })
            .collect())
    }

    /// Creates the user's override or replaces the existing one in place.
    ///
    /// Replacing re-activates the record and overwrites percentage, expiry, reason and
    /// `created_by`; the id and `created_at` are kept.
    ///
    /// # Arguments
    /// - `params` - Validated override values
    /// - `at` - Timestamp for `updated_at` (and `created_at` on insert)
    ///
    /// # Returns
    /// - `Ok((ClientOverride, true))` - New override inserted
    /// - `Ok((ClientOverride, false))` - Existing override replaced
    /// - `Err(DbErr)` - Database error during insert or update
    pub async fn upsert(
        &self,
        params: UpsertClientOverrideParams,
        at: DateTime<Utc>,
    ) -> Result<(ClientOverride, bool), DbErr> {
        let existing = entity::prelude::ReferralClientOverride::find()
            .filter(entity::referral_client_override::Column::UserId.eq(params.user_id.as_str()))
            .one(self.db)
            .await?;

        let created = existing.is_none();

        let entity = match existing {
            Some(existing) => {
                let mut active = existing.into_active_model();
                active.bonus_percentage = ActiveValue::Set(params.bonus_percentage);
                active.expires_at = ActiveValue::Set(params.expires_at);
                active.reason = ActiveValue::Set(params.reason);
                active.is_active = ActiveValue::Set(true);
                active.created_by = ActiveValue::Set(params.created_by);
                active.updated_at = ActiveValue::Set(at);
                active.update(self.db).await?
            }
            None => {
                entity::referral_client_override::ActiveModel {
                    override_id: ActiveValue::Set(uuid::Uuid::new_v4().to_string()),
                    user_id: ActiveValue::Set(params.user_id),
                    bonus_percentage: ActiveValue::Set(params.bonus_percentage),
                    expires_at: ActiveValue::Set(params.expires_at),
                    reason: ActiveValue::Set(params.reason),
                    is_active: ActiveValue::Set(true),
                    created_by: ActiveValue::Set(params.created_by),
                    created_at: ActiveValue::Set(at),
                    updated_at: ActiveValue::Set(at),
                }
                .insert(self.db)
                .await?
            }
        };

        Ok((ClientOverride::from_entity(entity), created))
    }

    /// Applies the provided fields to the user's override.
    ///
    /// # Returns
    /// - `Ok(Some(ClientOverride))` - Updated override
    /// - `Ok(None)` - User has no override
    /// - `Err(DbErr)` - Database error during update
    pub async fn patch(
        &self,
        user_id: &str,
        params: PatchClientOverrideParams,
        at: DateTime<Utc>,
    ) -> Result<Option<ClientOverride>, DbErr> {
        let Some(existing) = entity::prelude::ReferralClientOverride::find()
            .filter(entity::referral_client_override::Column::UserId.eq(user_id))
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active = existing.into_active_model();
        if let Some(bonus_percentage) = params.bonus_percentage {
            active.bonus_percentage = ActiveValue::Set(bonus_percentage);
        }
        if let Some(expires_at) = params.expires_at {
            active.expires_at = ActiveValue::Set(Some(expires_at));
        }
        if let Some(reason) = params.reason {
            active.reason = ActiveValue::Set(reason);
        }
        if let Some(is_active) = params.is_active {
            active.is_active = ActiveValue::Set(is_active);
        }
        active.updated_at = ActiveValue::Set(at);

        let entity = active.update(self.db).await?;

        Ok(Some(ClientOverride::from_entity(entity)))
    }

    /// Deletes the user's override.
    ///
    /// # Returns
    /// - `Ok(true)` - Override deleted
    /// - `Ok(false)` - User had no override
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, user_id: &str) -> Result<bool, DbErr> {
        let result = entity::prelude::ReferralClientOverride::delete_many()
            .filter(entity::referral_client_override::Column::UserId.eq(user_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
