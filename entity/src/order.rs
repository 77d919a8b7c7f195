use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "orders")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub order_id: String,
    pub user_id: String,
    /// `deposit`, `game_load`, `wallet_load`, `withdrawal`, `withdrawal_game`, `wallet_redeem`, ...
    pub order_type: String,
    pub status: String,
    pub amount: f64,
    /// Amount credited to the player including bonus, when different from `amount`.
    pub total_amount: Option<f64>,
    pub payout_amount: Option<f64>,
    pub bonus_amount: f64,
    pub bonus_consumed: f64,
    pub void_amount: f64,
    pub game_name: Option<String>,
    pub created_at: DateTimeUtc,
    pub approved_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
