use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "referral_earnings")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub earning_id: String,
    pub referrer_user_id: String,
    pub referee_user_id: String,
    pub amount: f64,
    pub status: String,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
