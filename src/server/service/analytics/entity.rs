//! Drill-down reports for a single client or game.

use std::collections::HashSet;

use chrono::{DateTime, Duration, Utc};

use crate::{
    model::analytics::{
        CashoutProjectionDto, ClientAnalyticsDto, ClientBalancesDto, GameAnalyticsDto,
        GameBonusDto, GameExposureSummaryDto, GameFinancialDto, GamePlayersDto, LifetimeStatsDto,
        RiskFlagsDto, WithdrawalStatusDto,
    },
    server::{
        model::{
            analytics::{CashoutMultipliers, Game},
            order::Order,
            user::User,
        },
        service::analytics::exposure::ExecutedFlows,
        util::number::{round1, round2},
    },
};

/// Window for a game's recently active players.
const ACTIVE_PLAYER_DAYS: i64 = 7;

/// Builds the client report from the account and every order it placed.
pub fn build_client_analytics(
    user: &User,
    orders: &[Order],
    multipliers: CashoutMultipliers,
) -> ClientAnalyticsDto {
    let lifetime = ExecutedFlows::collect(orders);
    let balance = user.cash_and_bonus();
    let max_eligible = balance.min(user.total_deposited * multipliers.max);

    let (withdrawable, locked_amount) = if user.withdraw_locked {
        (0.0, balance)
    } else {
        (user.cash_balance, user.bonus_balance)
    };

    ClientAnalyticsDto {
        user_id: user.user_id.clone(),
        username: user.username.clone(),
        balances: ClientBalancesDto {
            cash: round2(user.cash_balance),
            bonus: round2(user.bonus_balance),
            play_credits: round2(user.play_credits),
            total: round2(balance),
        },
        withdrawal_status: WithdrawalStatusDto {
            locked: user.withdraw_locked,
            withdrawable: round2(withdrawable),
            locked_amount: round2(locked_amount),
        },
        cashout_projection: CashoutProjectionDto {
            max_eligible_cashout: round2(max_eligible),
            expected_void_if_withdrawn: round2(user.bonus_balance),
            max_multiplier: multipliers.max,
            total_deposited: round2(user.total_deposited),
        },
        lifetime_stats: LifetimeStatsDto {
            deposits: round2(lifetime.deposited),
            withdrawals: round2(lifetime.withdrawn),
            bonus_received: round2(lifetime.bonus_issued),
            voided: round2(lifetime.bonus_voided),
            deposit_count: lifetime.deposit_count,
            withdrawal_count: lifetime.withdrawal_count,
        },
        risk_flags: RiskFlagsDto {
            is_suspicious: user.is_suspicious,
            withdraw_locked: user.withdraw_locked,
        },
    }
}

/// `(deposits − withdrawals) / deposits × 100`, zero when nothing was deposited.
pub fn profit_margin_percent(deposits: f64, withdrawals: f64) -> f64 {
    if deposits > 0.0 {
        (deposits - withdrawals) / deposits * 100.0
    } else {
        0.0
    }
}

/// Builds the game report.
///
/// # Arguments
/// - `game` - The game
/// - `orders` - Every order for the game, any status
/// - `players` - Client accounts that placed any of those orders
/// - `multipliers` - Configured cashout multipliers
/// - `at` - Reference instant for the active-player window
pub fn build_game_analytics(
    game: &Game,
    orders: &[Order],
    players: &[User],
    multipliers: CashoutMultipliers,
    at: DateTime<Utc>,
) -> GameAnalyticsDto {
    let flows = ExecutedFlows::collect(orders);
    let active_since = at - Duration::days(ACTIVE_PLAYER_DAYS);

    let executed = orders.iter().filter(|o| o.is_executed());
    let total_players: HashSet<&str> = executed.clone().map(|o| o.user_id.as_str()).collect();
    let active_players: HashSet<&str> = executed
        .filter(|o| o.created_at >= active_since)
        .map(|o| o.user_id.as_str())
        .collect();

    let avg_balance = if players.is_empty() {
        0.0
    } else {
        players.iter().map(User::cash_and_bonus).sum::<f64>() / players.len() as f64
    };

    GameAnalyticsDto {
        game_name: game.game_name.clone(),
        display_name: game.display_name.clone(),
        is_active: game.is_active,
        financial: GameFinancialDto {
            total_deposits: round2(flows.deposited),
            total_withdrawals: round2(flows.withdrawn),
            net_profit: round2(flows.net()),
            profit_margin_percent: round1(profit_margin_percent(flows.deposited, flows.withdrawn)),
        },
        bonus: GameBonusDto {
            issued: round2(flows.bonus_issued),
            converted: round2(flows.bonus_converted),
            voided: round2(flows.bonus_voided),
        },
        players: GamePlayersDto {
            total: total_players.len() as u64,
            active_7d: active_players.len() as u64,
            avg_balance: round2(avg_balance),
        },
        exposure: GameExposureSummaryDto {
            max_probable_cashout: round2(flows.max_exposure(multipliers.max)),
        },
    }
}
