use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "referral_tiers")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub tier_id: String,
    #[sea_orm(unique)]
    pub tier_name: String,
    /// Inclusive lower bound.
    pub min_referrals: i32,
    /// Inclusive upper bound, `None` is unbounded.
    pub max_referrals: Option<i32>,
    pub bonus_percentage: f64,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub is_active: bool,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
