use sea_orm::entity::prelude::*;

/// Time-bounded, platform-wide bonus campaign.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "referral_global_overrides")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub override_id: String,
    pub name: String,
    pub bonus_percentage: f64,
    pub start_date: DateTimeUtc,
    pub end_date: DateTimeUtc,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub is_active: bool,
    pub created_by: Option<String>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
