use sea_orm::entity::prelude::*;

/// Platform account. Balances are owned by the account subsystem; this service
/// only reads them.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub user_id: String,
    #[sea_orm(unique)]
    pub username: String,
    pub display_name: Option<String>,
    /// `user` or `admin`
    pub role: String,
    pub is_active: bool,
    /// Set once at signup, never mutated afterwards.
    pub referred_by_user_id: Option<String>,
    pub cash_balance: f64,
    pub bonus_balance: f64,
    pub play_credits: f64,
    pub total_deposited: f64,
    pub total_withdrawn: f64,
    pub withdraw_locked: bool,
    pub is_suspicious: bool,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_one = "super::referral_client_override::Entity")]
    ReferralClientOverride,
}

impl Related<super::referral_client_override::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ReferralClientOverride.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
