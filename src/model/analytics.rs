//! Report shapes for the admin analytics endpoints.
//!
//! Monetary fields are rounded to two decimals, percentages to one.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum PressureIndicatorDto {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ClientBalanceDto {
    pub cash: f64,
    pub bonus: f64,
    pub play_credits: f64,
    pub combined: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RiskAmountDto {
    pub amount: f64,
    pub max_multiplier_used: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CashoutPressureDto {
    pub indicator: PressureIndicatorDto,
    pub pending_count: u64,
    pub pending_amount: f64,
    pub pressure_ratio_percent: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RiskSnapshotDto {
    pub total_client_balance: ClientBalanceDto,
    pub risk_max_24h: RiskAmountDto,
    pub probable_max_cashout: RiskAmountDto,
    pub cashout_pressure: CashoutPressureDto,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TrendDayDto {
    /// Local calendar date, `YYYY-MM-DD`.
    pub date: String,
    pub deposits: f64,
    pub withdrawals_paid: f64,
    pub bonus_issued: f64,
    pub bonus_voided: f64,
    pub net_profit: f64,
    pub referral_earnings_paid: f64,
    pub active_clients: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TrendTotalsDto {
    pub deposits: f64,
    pub withdrawals_paid: f64,
    pub bonus_issued: f64,
    pub bonus_voided: f64,
    pub net_profit: f64,
    pub referral_earnings_paid: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PlatformTrendsDto {
    pub days: u32,
    /// Oldest day first.
    pub data: Vec<TrendDayDto>,
    pub totals: TrendTotalsDto,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PlatformExposureDto {
    pub total_cash_balance: f64,
    pub total_bonus_balance: f64,
    pub total_play_credits: f64,
    pub combined_balance: f64,
    pub locked_balance: f64,
    pub withdrawable_balance: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MultiplierSettingsDto {
    pub min: f64,
    pub max: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct GameExposureDto {
    pub game: String,
    pub display_name: String,
    pub total_deposited: f64,
    pub total_withdrawn: f64,
    pub max_exposure: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ClientTierExposureDto {
    /// `vip`, `regular` or `new`.
    pub tier: String,
    pub client_count: u64,
    pub total_balance: f64,
    pub max_cashout: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProbableMaxCashoutDto {
    pub total_probable_max: f64,
    pub cash_only_max: f64,
    pub bonus_inclusive_max: f64,
    pub multiplier_settings: MultiplierSettingsDto,
    pub by_game: Vec<GameExposureDto>,
    pub by_tier: Vec<ClientTierExposureDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct BonusRiskDto {
    pub bonus_issued: f64,
    pub bonus_converted: f64,
    pub bonus_voided: f64,
    pub bonus_at_risk: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ClientRiskRowDto {
    pub user_id: String,
    pub username: String,
    pub display_name: Option<String>,
    pub cash_balance: f64,
    pub bonus_balance: f64,
    pub total_balance: f64,
    pub total_deposited: f64,
    pub total_withdrawn: f64,
    pub max_eligible_cashout: f64,
    pub is_suspicious: bool,
    pub withdraw_locked: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct GameRiskRowDto {
    pub game: String,
    pub display_name: String,
    pub active_players: u64,
    pub total_in: f64,
    pub total_out: f64,
    pub net_profit: f64,
    pub bonus_given: f64,
    pub voided: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RiskTablesDto {
    pub client_risk: Vec<ClientRiskRowDto>,
    pub game_risk: Vec<GameRiskRowDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RiskExposureDto {
    pub platform_exposure: PlatformExposureDto,
    pub probable_max_cashout: ProbableMaxCashoutDto,
    pub bonus_risk: BonusRiskDto,
    pub tables: RiskTablesDto,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ClientBalancesDto {
    pub cash: f64,
    pub bonus: f64,
    pub play_credits: f64,
    pub total: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct WithdrawalStatusDto {
    pub locked: bool,
    pub withdrawable: f64,
    pub locked_amount: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CashoutProjectionDto {
    pub max_eligible_cashout: f64,
    pub expected_void_if_withdrawn: f64,
    pub max_multiplier: f64,
    pub total_deposited: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct LifetimeStatsDto {
    pub deposits: f64,
    pub withdrawals: f64,
    pub bonus_received: f64,
    pub voided: f64,
    pub deposit_count: u64,
    pub withdrawal_count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RiskFlagsDto {
    pub is_suspicious: bool,
    pub withdraw_locked: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ClientAnalyticsDto {
    pub user_id: String,
    pub username: String,
    pub balances: ClientBalancesDto,
    pub withdrawal_status: WithdrawalStatusDto,
    pub cashout_projection: CashoutProjectionDto,
    pub lifetime_stats: LifetimeStatsDto,
    pub risk_flags: RiskFlagsDto,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct GameFinancialDto {
    pub total_deposits: f64,
    pub total_withdrawals: f64,
    pub net_profit: f64,
    pub profit_margin_percent: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct GameBonusDto {
    pub issued: f64,
    pub converted: f64,
    pub voided: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct GamePlayersDto {
    pub total: u64,
    pub active_7d: u64,
    pub avg_balance: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct GameExposureSummaryDto {
    pub max_probable_cashout: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct GameAnalyticsDto {
    pub game_name: String,
    pub display_name: String,
    pub is_active: bool,
    pub financial: GameFinancialDto,
    pub bonus: GameBonusDto,
    pub players: GamePlayersDto,
    pub exposure: GameExposureSummaryDto,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MetricDto {
    pub value: f64,
    /// `percent`, `x` or `hours`.
    pub unit: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AdvancedMetricsValuesDto {
    pub bonus_conversion_ratio: MetricDto,
    pub avg_multiplier_reached: MetricDto,
    pub avg_deposit_to_withdrawal_hours: MetricDto,
    pub clients_never_withdrawing_pct: MetricDto,
    pub bonus_only_players_pct: MetricDto,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AdvancedMetricsDto {
    pub period_days: u32,
    pub metrics: AdvancedMetricsValuesDto,
}
