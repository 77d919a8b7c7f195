//! Dashboard risk snapshot.

use crate::{
    model::analytics::{
        CashoutPressureDto, ClientBalanceDto, PressureIndicatorDto, RiskAmountDto, RiskSnapshotDto,
    },
    server::{
        model::{analytics::CashoutMultipliers, order::Order, user::User},
        util::number::{round1, round2},
    },
};

/// Pressure ratio below which cashout pressure is `low`.
const LOW_PRESSURE_PERCENT: f64 = 20.0;
/// Pressure ratio below which cashout pressure is `medium`.
const MEDIUM_PRESSURE_PERCENT: f64 = 50.0;

/// Buckets the pending-to-balance ratio.
pub fn pressure_indicator(ratio_percent: f64) -> PressureIndicatorDto {
    if ratio_percent < LOW_PRESSURE_PERCENT {
        PressureIndicatorDto::Low
    } else if ratio_percent < MEDIUM_PRESSURE_PERCENT {
        PressureIndicatorDto::Medium
    } else {
        PressureIndicatorDto::High
    }
}

/// Largest single `amount × max_multiplier` among approved load orders.
///
/// `recent_approved` must already be narrowed to the trailing 24 hours.
pub fn risk_max(recent_approved: &[Order], max_multiplier: f64) -> f64 {
    recent_approved
        .iter()
        .filter(|order| order.is_load() && order.is_approved())
        .map(|order| order.amount * max_multiplier)
        .fold(0.0, f64::max)
}

/// Folds the snapshot from active clients, the last day of approved orders and the
/// pending withdrawal queue.
pub fn build_risk_snapshot(
    clients: &[User],
    recent_approved: &[Order],
    pending_withdrawals: &[Order],
    multipliers: CashoutMultipliers,
) -> RiskSnapshotDto {
    let cash: f64 = clients.iter().map(|c| c.cash_balance).sum();
    let bonus: f64 = clients.iter().map(|c| c.bonus_balance).sum();
    let play_credits: f64 = clients.iter().map(|c| c.play_credits).sum();
    let combined = cash + bonus + play_credits;

    let risk_max = risk_max(recent_approved, multipliers.max);

    let pending_count = pending_withdrawals.len() as u64;
    let pending_amount: f64 = pending_withdrawals.iter().map(|o| o.amount).sum();
    let ratio = if combined > 0.0 {
        pending_amount / combined * 100.0
    } else {
        0.0
    };

    RiskSnapshotDto {
        total_client_balance: ClientBalanceDto {
            cash: round2(cash),
            bonus: round2(bonus),
            play_credits: round2(play_credits),
            combined: round2(combined),
        },
        risk_max_24h: RiskAmountDto {
            amount: round2(risk_max),
            max_multiplier_used: multipliers.max,
        },
        probable_max_cashout: RiskAmountDto {
            amount: round2(combined.min(risk_max)),
            max_multiplier_used: multipliers.max,
        },
        cashout_pressure: CashoutPressureDto {
            indicator: pressure_indicator(ratio),
            pending_count,
            pending_amount: round2(pending_amount),
            pressure_ratio_percent: round1(ratio),
        },
    }
}
