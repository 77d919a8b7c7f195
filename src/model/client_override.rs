use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ClientOverrideDto {
    pub override_id: String,
    pub user_id: String,
    pub username: Option<String>,
    pub display_name: Option<String>,
    pub bonus_percentage: f64,
    pub expires_at: Option<DateTime<Utc>>,
    pub reason: String,
    pub is_active: bool,
    pub created_by: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ClientOverrideListDto {
    pub overrides: Vec<ClientOverrideDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CreateClientOverrideDto {
    pub user_id: String,
    pub bonus_percentage: f64,
    /// `null` never expires.
    pub expires_at: Option<DateTime<Utc>>,
    pub reason: String,
}

/// Partial update, absent fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UpdateClientOverrideDto {
    pub bonus_percentage: Option<f64>,
    pub expires_at: Option<DateTime<Utc>>,
    pub reason: Option<String>,
    pub is_active: Option<bool>,
}

/// Result of a create call, which upserts on `user_id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ClientOverrideUpsertDto {
    /// `true` when a new record was inserted, `false` when an existing one was replaced.
    pub created: bool,
    #[serde(rename = "override")]
    pub client_override: ClientOverrideDto,
}
