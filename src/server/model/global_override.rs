//! Global campaign override domain models and parameters.

use chrono::{DateTime, Utc};

use crate::{
    model::global_override::{GlobalOverrideDto, GlobalOverrideInputDto, GlobalOverrideListDto},
    server::{error::referral::ReferralError, model::bonus::validate_percentage},
};

/// Time-bounded bonus percentage applied to every user.
#[derive(Debug, Clone, PartialEq)]
pub struct GlobalOverride {
    pub override_id: String,
    pub name: String,
    pub bonus_percentage: f64,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub description: Option<String>,
    pub is_active: bool,
    pub created_by: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl GlobalOverride {
    pub fn into_dto(self) -> GlobalOverrideDto {
        GlobalOverrideDto {
            override_id: self.override_id,
            name: self.name,
            bonus_percentage: self.bonus_percentage,
            start_date: self.start_date,
            end_date: self.end_date,
            description: self.description,
            is_active: self.is_active,
            created_by: self.created_by,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    pub fn from_entity(entity: entity::referral_global_override::Model) -> Self {
        Self {
            override_id: entity.override_id,
            name: entity.name,
            bonus_percentage: entity.bonus_percentage,
            start_date: entity.start_date,
            end_date: entity.end_date,
            description: entity.description,
            is_active: entity.is_active,
            created_by: entity.created_by,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

/// Values for creating or replacing a campaign.
#[derive(Debug, Clone)]
pub struct GlobalOverrideParams {
    pub name: String,
    pub bonus_percentage: f64,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub description: Option<String>,
    pub is_active: bool,
}

impl GlobalOverrideParams {
    pub fn from_dto(dto: GlobalOverrideInputDto) -> Self {
        Self {
            name: dto.name,
            bonus_percentage: dto.bonus_percentage,
            start_date: dto.start_date,
            end_date: dto.end_date,
            description: dto.description,
            is_active: dto.is_active,
        }
    }

    /// # Returns
    /// - `Ok(())` - Valid campaign
    /// - `Err(ReferralError::InvalidPercentage)` - Percentage outside `0..=100`
    /// - `Err(ReferralError::InvalidDateRange)` - `end_date` before `start_date`
    pub fn validate(&self) -> Result<(), ReferralError> {
        validate_percentage(self.bonus_percentage)?;

        if self.end_date < self.start_date {
            return Err(ReferralError::InvalidDateRange);
        }

        Ok(())
    }
}

/// Every campaign plus the one resolution currently applies.
#[derive(Debug, Clone, PartialEq)]
pub struct GlobalOverrideListing {
    /// Ordered by `start_date` descending.
    pub overrides: Vec<GlobalOverride>,
    pub active_override: Option<GlobalOverride>,
}

impl GlobalOverrideListing {
    pub fn into_dto(self) -> GlobalOverrideListDto {
        GlobalOverrideListDto {
            overrides: self
                .overrides
                .into_iter()
                .map(GlobalOverride::into_dto)
                .collect(),
            active_override: self.active_override.map(GlobalOverride::into_dto),
        }
    }
}
