//! Per-user override domain models and parameters.

use chrono::{DateTime, Utc};

use crate::{
    model::client_override::{
        ClientOverrideDto, ClientOverrideUpsertDto, CreateClientOverrideDto,
        UpdateClientOverrideDto,
    },
    server::{error::referral::ReferralError, model::bonus::validate_percentage},
};

/// Admin-set bonus percentage exception for a single user.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientOverride {
    pub override_id: String,
    pub user_id: String,
    pub bonus_percentage: f64,
    /// `None` never expires.
    pub expires_at: Option<DateTime<Utc>>,
    pub reason: String,
    pub is_active: bool,
    pub created_by: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ClientOverride {
    pub fn from_entity(entity: entity::referral_client_override::Model) -> Self {
        Self {
            override_id: entity.override_id,
            user_id: entity.user_id,
            bonus_percentage: entity.bonus_percentage,
            expires_at: entity.expires_at,
            reason: entity.reason,
            is_active: entity.is_active,
            created_by: entity.created_by,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

/// Client override joined with the overridden user's names for admin listings.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientOverrideEntry {
    pub client_override: ClientOverride,
    pub username: Option<String>,
    pub display_name: Option<String>,
}

impl ClientOverrideEntry {
    pub fn into_dto(self) -> ClientOverrideDto {
        let client_override = self.client_override;

        ClientOverrideDto {
            override_id: client_override.override_id,
            user_id: client_override.user_id,
            username: self.username,
            display_name: self.display_name,
            bonus_percentage: client_override.bonus_percentage,
            expires_at: client_override.expires_at,
            reason: client_override.reason,
            is_active: client_override.is_active,
            created_by: client_override.created_by,
            created_at: client_override.created_at,
            updated_at: client_override.updated_at,
        }
    }
}

/// Outcome of an upsert on `user_id`.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientOverrideUpsert {
    /// `true` when no record existed for the user.
    pub created: bool,
    pub entry: ClientOverrideEntry,
}

impl ClientOverrideUpsert {
    pub fn into_dto(self) -> ClientOverrideUpsertDto {
        ClientOverrideUpsertDto {
            created: self.created,
            client_override: self.entry.into_dto(),
        }
    }
}

/// Values for creating a client override, or replacing the user's existing one.
#[derive(Debug, Clone)]
pub struct UpsertClientOverrideParams {
    pub user_id: String,
    pub bonus_percentage: f64,
    pub expires_at: Option<DateTime<Utc>>,
    pub reason: String,
    /// Admin user id performing the change.
    pub created_by: Option<String>,
}

impl UpsertClientOverrideParams {
    pub fn from_dto(dto: CreateClientOverrideDto, created_by: Option<String>) -> Self {
        Self {
            user_id: dto.user_id,
            bonus_percentage: dto.bonus_percentage,
            expires_at: dto.expires_at,
            reason: dto.reason,
            created_by,
        }
    }

    pub fn validate(&self) -> Result<(), ReferralError> {
        validate_percentage(self.bonus_percentage)?;
        validate_reason(&self.reason)?;
        Ok(())
    }
}

/// Partial update, `None` fields are left unchanged.
#[derive(Debug, Clone, Default)]
pub struct PatchClientOverrideParams {
    pub bonus_percentage: Option<f64>,
    pub expires_at: Option<DateTime<Utc>>,
    pub reason: Option<String>,
    pub is_active: Option<bool>,
}

impl PatchClientOverrideParams {
    pub fn from_dto(dto: UpdateClientOverrideDto) -> Self {
        Self {
            bonus_percentage: dto.bonus_percentage,
            expires_at: dto.expires_at,
            reason: dto.reason,
            is_active: dto.is_active,
        }
    }

    pub fn validate(&self) -> Result<(), ReferralError> {
        if let Some(percentage) = self.bonus_percentage {
            validate_percentage(percentage)?;
        }
        if let Some(reason) = &self.reason {
            validate_reason(reason)?;
        }
        Ok(())
    }
}

fn validate_reason(reason: &str) -> Result<(), ReferralError> {
    if reason.trim().is_empty() {
        return Err(ReferralError::MissingReason);
    }
    Ok(())
}
