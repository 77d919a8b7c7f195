//! Risk and exposure report.
//!
//! Per-game and bonus figures count only `deposit`/`withdrawal` orders in the
//! `APPROVED_EXECUTED` state; a withdrawal without a recorded payout counts as zero.

use std::collections::{HashMap, HashSet};

use crate::{
    model::analytics::{
        BonusRiskDto, ClientRiskRowDto, ClientTierExposureDto, GameExposureDto, GameRiskRowDto,
        MultiplierSettingsDto, PlatformExposureDto, ProbableMaxCashoutDto, RiskExposureDto,
        RiskTablesDto,
    },
    server::{
        model::{
            analytics::{CashoutMultipliers, Game},
            order::Order,
            user::User,
        },
        util::number::round2,
    },
};

/// Number of rows in the client risk table.
pub const CLIENT_RISK_ROWS: usize = 10;

const VIP_DEPOSIT_THRESHOLD: f64 = 1000.0;
const REGULAR_DEPOSIT_THRESHOLD: f64 = 100.0;

const CLIENT_TIERS: [&str; 3] = ["vip", "regular", "new"];

/// Lifetime deposit bucket of a client.
pub fn client_tier(total_deposited: f64) -> &'static str {
    if total_deposited >= VIP_DEPOSIT_THRESHOLD {
        "vip"
    } else if total_deposited >= REGULAR_DEPOSIT_THRESHOLD {
        "regular"
    } else {
        "new"
    }
}

/// Executed money movements of one game or client.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExecutedFlows {
    pub deposited: f64,
    pub withdrawn: f64,
    pub deposit_count: u64,
    pub withdrawal_count: u64,
    pub bonus_issued: f64,
    pub bonus_converted: f64,
    pub bonus_voided: f64,
}

impl ExecutedFlows {
    pub fn collect<'o>(orders: impl IntoIterator<Item = &'o Order>) -> Self {
        let mut flows = Self::default();

        for order in orders.into_iter().filter(|o| o.is_executed()) {
            if order.is_executed_deposit() {
                flows.deposited += order.amount;
                flows.deposit_count += 1;
            }
            if order.is_executed_withdrawal() {
                flows.withdrawn += order.payout_amount.unwrap_or(0.0);
                flows.withdrawal_count += 1;
            }
            flows.bonus_issued += order.bonus_amount;
            flows.bonus_converted += order.bonus_consumed;
            flows.bonus_voided += order.void_amount;
        }

        flows
    }

    pub fn net(&self) -> f64 {
        self.deposited - self.withdrawn
    }

    /// `deposited × max − withdrawn`.
    pub fn max_exposure(&self, max_multiplier: f64) -> f64 {
        self.deposited * max_multiplier - self.withdrawn
    }
}

fn orders_by_game(orders: &[Order]) -> HashMap<&str, Vec<&Order>> {
    let mut grouped: HashMap<&str, Vec<&Order>> = HashMap::new();
    for order in orders {
        if let Some(game_name) = order.game_name.as_deref() {
            grouped.entry(game_name).or_default().push(order);
        }
    }
    grouped
}

fn platform_exposure(clients: &[User]) -> PlatformExposureDto {
    let cash: f64 = clients.iter().map(|c| c.cash_balance).sum();
    let bonus: f64 = clients.iter().map(|c| c.bonus_balance).sum();
    let play_credits: f64 = clients.iter().map(|c| c.play_credits).sum();
    let locked: f64 = clients
        .iter()
        .filter(|c| c.withdraw_locked)
        .map(User::cash_and_bonus)
        .sum();
    let withdrawable: f64 = clients
        .iter()
        .filter(|c| !c.withdraw_locked)
        .map(|c| c.cash_balance)
        .sum();

    PlatformExposureDto {
        total_cash_balance: round2(cash),
        total_bonus_balance: round2(bonus),
        total_play_credits: round2(play_credits),
        combined_balance: round2(cash + bonus + play_credits),
        locked_balance: round2(locked),
        withdrawable_balance: round2(withdrawable),
    }
}

fn tier_exposure(clients: &[User], max_multiplier: f64) -> Vec<ClientTierExposureDto> {
    CLIENT_TIERS
        .iter()
        .filter_map(|tier| {
            let members: Vec<&User> = clients
                .iter()
                .filter(|c| client_tier(c.total_deposited) == *tier)
                .collect();
            if members.is_empty() {
                return None;
            }

            let total_balance: f64 = members.iter().map(|c| c.cash_and_bonus()).sum();
            let total_deposited: f64 = members.iter().map(|c| c.total_deposited).sum();

            Some(ClientTierExposureDto {
                tier: tier.to_string(),
                client_count: members.len() as u64,
                total_balance: round2(total_balance),
                max_cashout: round2(total_deposited * max_multiplier),
            })
        })
        .collect()
}

fn client_risk(clients: &[User], max_multiplier: f64) -> Vec<ClientRiskRowDto> {
    let mut ranked: Vec<&User> = clients.iter().collect();
    ranked.sort_by(|a, b| b.cash_and_bonus().total_cmp(&a.cash_and_bonus()));

    ranked
        .into_iter()
        .take(CLIENT_RISK_ROWS)
        .map(|c| ClientRiskRowDto {
            user_id: c.user_id.clone(),
            username: c.username.clone(),
            display_name: c.display_name.clone(),
            cash_balance: round2(c.cash_balance),
            bonus_balance: round2(c.bonus_balance),
            total_balance: round2(c.cash_and_bonus()),
            total_deposited: round2(c.total_deposited),
            total_withdrawn: round2(c.total_withdrawn),
            max_eligible_cashout: round2(c.total_deposited * max_multiplier),
            is_suspicious: c.is_suspicious,
            withdraw_locked: c.withdraw_locked,
        })
        .collect()
}

/// Builds the full exposure report.
///
/// # Arguments
/// - `clients` - Active client accounts
/// - `games` - Every game, including those with no orders yet
/// - `game_orders` - Every order attached to a game, any status
/// - `executed` - Every `APPROVED_EXECUTED` order, with or without a game
/// - `multipliers` - Configured cashout multipliers
pub fn build_risk_exposure(
    clients: &[User],
    games: &[Game],
    game_orders: &[Order],
    executed: &[Order],
    multipliers: CashoutMultipliers,
) -> RiskExposureDto {
    let max = multipliers.max;
    let platform = platform_exposure(clients);
    let by_game_orders = orders_by_game(game_orders);

    let mut game_rows: Vec<(&Game, ExecutedFlows, u64)> = games
        .iter()
        .map(|game| {
            let orders = by_game_orders
                .get(game.game_name.as_str())
                .map(Vec::as_slice)
                .unwrap_or_default();
            let players: HashSet<&str> = orders.iter().map(|o| o.user_id.as_str()).collect();
            (
                game,
                ExecutedFlows::collect(orders.iter().copied()),
                players.len() as u64,
            )
        })
        .collect();
    game_rows.sort_by(|a, b| b.1.deposited.total_cmp(&a.1.deposited));

    let by_game = game_rows
        .iter()
        .map(|(game, flows, _)| GameExposureDto {
            game: game.game_name.clone(),
            display_name: game.display_name.clone(),
            total_deposited: round2(flows.deposited),
            total_withdrawn: round2(flows.withdrawn),
            max_exposure: round2(flows.max_exposure(max)),
        })
        .collect();

    let game_risk = game_rows
        .iter()
        .map(|(game, flows, players)| GameRiskRowDto {
            game: game.game_name.clone(),
            display_name: game.display_name.clone(),
            active_players: *players,
            total_in: round2(flows.deposited),
            total_out: round2(flows.withdrawn),
            net_profit: round2(flows.net()),
            bonus_given: round2(flows.bonus_issued),
            voided: round2(flows.bonus_voided),
        })
        .collect();

    let platform_flows = ExecutedFlows::collect(executed);
    let bonus_at_risk: f64 = clients.iter().map(|c| c.bonus_balance).sum();

    RiskExposureDto {
        probable_max_cashout: ProbableMaxCashoutDto {
            total_probable_max: round2(platform.withdrawable_balance * max),
            cash_only_max: platform.total_cash_balance,
            bonus_inclusive_max: platform.combined_balance,
            multiplier_settings: MultiplierSettingsDto {
                min: multipliers.min,
                max,
            },
            by_game,
            by_tier: tier_exposure(clients, max),
        },
        platform_exposure: platform,
        bonus_risk: BonusRiskDto {
            bonus_issued: round2(platform_flows.bonus_issued),
            bonus_converted: round2(platform_flows.bonus_converted),
            bonus_voided: round2(platform_flows.bonus_voided),
            bonus_at_risk: round2(bonus_at_risk),
        },
        tables: RiskTablesDto {
            client_risk: client_risk(clients, max),
            game_risk,
        },
    }
}
