//! Global override (campaign) factory.

use crate::factory::helpers::{next_id, reference_time};
use chrono::{DateTime, Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating campaigns with customizable fields.
///
/// Defaults to an active 20% campaign running from one day before to one day
/// after `helpers::reference_time()`.
pub struct GlobalOverrideFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::referral_global_override::Model,
}

impl<'a> GlobalOverrideFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        let now = reference_time();
        Self {
            db,
            entity: entity::referral_global_override::Model {
                override_id: format!("global_{}", id),
                name: format!("Campaign {}", id),
                bonus_percentage: 20.0,
                start_date: now - Duration::days(1),
                end_date: now + Duration::days(1),
                description: None,
                is_active: true,
                created_by: None,
                created_at: now - Duration::days(2),
                updated_at: now - Duration::days(2),
            },
        }
    }

    pub fn override_id(mut self, override_id: impl Into<String>) -> Self {
        self.entity.override_id = override_id.into();
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.entity.name = name.into();
        self
    }

    pub fn bonus_percentage(mut self, pct: f64) -> Self {
        self.entity.bonus_percentage = pct;
        self
    }

    /// Sets the inclusive validity window.
    pub fn window(mut self, start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        self.entity.start_date = start;
        self.entity.end_date = end;
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

    /// Builds and inserts the campaign.
    pub async fn build(self) -> Result<entity::referral_global_override::Model, DbErr> {
        let e = self.entity;
        entity::referral_global_override::ActiveModel {
            override_id: ActiveValue::Set(e.override_id),
            name: ActiveValue::Set(e.name),
            bonus_percentage: ActiveValue::Set(e.bonus_percentage),
            start_date: ActiveValue::Set(e.start_date),
            end_date: ActiveValue::Set(e.end_date),
            description: ActiveValue::Set(e.description),
            is_active: ActiveValue::Set(e.is_active),
            created_by: ActiveValue::Set(e.created_by),
            created_at: ActiveValue::Set(e.created_at),
            updated_at: ActiveValue::Set(e.updated_at),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a campaign at `pct` active around `helpers::reference_time()`.
pub async fn create_global_override(
    db: &DatabaseConnection,
    pct: f64,
) -> Result<entity::referral_global_override::Model, DbErr> {
    GlobalOverrideFactory::new(db)
        .bonus_percentage(pct)
        .build()
        .await
}
