use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::tier::default_true;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct GlobalOverrideDto {
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

/// Campaign listing plus the campaign bonus resolution currently applies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct GlobalOverrideListDto {
    pub overrides: Vec<GlobalOverrideDto>,
    pub active_override: Option<GlobalOverrideDto>,
}

/// Body for both creating and replacing a campaign.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct GlobalOverrideInputDto {
    pub name: String,
    pub bonus_percentage: f64,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub description: Option<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
}
