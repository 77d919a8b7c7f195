//! Client override factory.

use crate::factory::helpers::{next_id, reference_time};
use chrono::{DateTime, Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for per-user overrides.
///
/// Defaults to an active, never-expiring 40% override. The user must exist.
pub struct ClientOverrideFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::referral_client_override::Model,
}

impl<'a> ClientOverrideFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, user_id: impl Into<String>) -> Self {
        let id = next_id();
        let created = reference_time() - Duration::days(1);
        Self {
            db,
            entity: entity::referral_client_override::Model {
                override_id: format!("client_{}", id),
                user_id: user_id.into(),
                bonus_percentage: 40.0,
                expires_at: None,
                reason: "VIP partner".to_string(),
                is_active: true,
                created_by: None,
                created_at: created,
                updated_at: created,
            },
        }
    }

    pub fn bonus_percentage(mut self, pct: f64) -> Self {
        self.entity.bonus_percentage = pct;
        self
    }

    pub fn expires_at(mut self, expires_at: Option<DateTime<Utc>>) -> Self {
        self.entity.expires_at = expires_at;
        self
    }

    pub fn reason(mut self, reason: impl Into<String>) -> Self {
        self.entity.reason = reason.into();
        self
    }

    pub fn is_active(mut self, is_active: bool) -> Self {
        self.entity.is_active = is_active;
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.entity.created_at = created_at;
        self.entity.updated_at = created_at;
        self
    }

    /// Builds and inserts the override.
    pub async fn build(self) -> Result<entity::referral_client_override::Model, DbErr> {
        let e = self.entity;
        entity::referral_client_override::ActiveModel {
            override_id: ActiveValue::Set(e.override_id),
            user_id: ActiveValue::Set(e.user_id),
            bonus_percentage: ActiveValue::Set(e.bonus_percentage),
            expires_at: ActiveValue::Set(e.expires_at),
            reason: ActiveValue::Set(e.reason),
            is_active: ActiveValue::Set(e.is_active),
            created_by: ActiveValue::Set(e.created_by),
            created_at: ActiveValue::Set(e.created_at),
            updated_at: ActiveValue::Set(e.updated_at),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an active, never-expiring override at `pct` for `user_id`.
pub async fn create_client_override(
    db: &DatabaseConnection,
    user_id: impl Into<String>,
    pct: f64,
) -> Result<entity::referral_client_override::Model, DbErr> {
    ClientOverrideFactory::new(db, user_id)
        .bonus_percentage(pct)
        .build()
        .await
}
