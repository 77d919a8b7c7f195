//! Efficiency metrics over a trailing window.
//!
//! Empty denominators are treated as one, so an idle platform reports 0% conversion
//! and 100% never-withdrawing clients.

use std::collections::{HashMap, HashSet};

use chrono::{DateTime, Utc};

use crate::{
    model::analytics::{AdvancedMetricsDto, AdvancedMetricsValuesDto, MetricDto},
    server::{
        model::{order::Order, user::User},
        util::number::{ratio_or_neutral, round1, round2},
    },
};

fn metric(value: f64, unit: &str, description: &str) -> MetricDto {
    MetricDto {
        value,
        unit: unit.to_string(),
        description: description.to_string(),
    }
}

/// Percentage of bonus issued that was consumed into cash.
pub fn bonus_conversion_ratio(executed: &[Order]) -> f64 {
    let issued: f64 = executed.iter().map(|o| o.bonus_amount).sum();
    let consumed: f64 = executed.iter().map(|o| o.bonus_consumed).sum();

    ratio_or_neutral(consumed, issued) * 100.0
}

/// Mean of withdrawn / deposited across users who both deposited and withdrew.
pub fn avg_multiplier_reached(executed: &[Order]) -> f64 {
    let mut per_user: HashMap<&str, (f64, f64)> = HashMap::new();
    for order in executed {
        let entry = per_user.entry(order.user_id.as_str()).or_default();
        if order.is_executed_deposit() {
            entry.0 += order.amount;
        }
        if order.is_executed_withdrawal() {
            entry.1 += order.payout_amount.unwrap_or(0.0);
        }
    }

    let ratios: Vec<f64> = per_user
        .values()
        .filter(|(deposited, withdrawn)| *deposited > 0.0 && *withdrawn > 0.0)
        .map(|(deposited, withdrawn)| withdrawn / deposited)
        .collect();

    if ratios.is_empty() {
        0.0
    } else {
        ratios.iter().sum::<f64>() / ratios.len() as f64
    }
}

/// Mean hours from a user's first deposit to their first withdrawal, counting only
/// users whose first withdrawal came after their first deposit.
pub fn avg_deposit_to_withdrawal_hours(executed_approved: &[Order]) -> f64 {
    let mut first_deposit: HashMap<&str, DateTime<Utc>> = HashMap::new();
    let mut first_withdrawal: HashMap<&str, DateTime<Utc>> = HashMap::new();

    for order in executed_approved {
        let Some(approved_at) = order.approved_at else {
            continue;
        };
        let target = if order.is_executed_deposit() {
            &mut first_deposit
        } else if order.is_executed_withdrawal() {
            &mut first_withdrawal
        } else {
            continue;
        };
        target
            .entry(order.user_id.as_str())
            .and_modify(|first| *first = (*first).min(approved_at))
            .or_insert(approved_at);
    }

    let hours: Vec<f64> = first_deposit
        .iter()
        .filter_map(|(user_id, deposited_at)| {
            let withdrawn_at = first_withdrawal.get(user_id)?;
            (withdrawn_at > deposited_at)
                .then(|| (*withdrawn_at - *deposited_at).num_seconds() as f64 / 3600.0)
        })
        .collect();

    if hours.is_empty() {
        0.0
    } else {
        hours.iter().sum::<f64>() / hours.len() as f64
    }
}

/// Percentage of depositing users with no executed withdrawal.
pub fn never_withdrawing_percent(executed: &[Order]) -> f64 {
    let depositors: HashSet<&str> = executed
        .iter()
        .filter(|o| o.is_executed_deposit())
        .map(|o| o.user_id.as_str())
        .collect();
    let withdrawers: HashSet<&str> = executed
        .iter()
        .filter(|o| o.is_executed_withdrawal())
        .map(|o| o.user_id.as_str())
        .collect();

    100.0 - ratio_or_neutral(withdrawers.len() as f64, depositors.len() as f64) * 100.0
}

/// Percentage of active clients holding bonus but no cash.
pub fn bonus_only_percent(clients: &[User]) -> f64 {
    let bonus_only = clients
        .iter()
        .filter(|c| c.cash_balance <= 0.0 && c.bonus_balance > 0.0)
        .count();

    ratio_or_neutral(bonus_only as f64, clients.len() as f64) * 100.0
}

/// Builds the metrics report.
///
/// # Arguments
/// - `days` - Window length, echoed back
/// - `executed_created` - `APPROVED_EXECUTED` orders created inside the window
/// - `executed_approved` - `APPROVED_EXECUTED` orders approved inside the window
/// - `clients` - Active client accounts
pub fn build_advanced_metrics(
    days: u32,
    executed_created: &[Order],
    executed_approved: &[Order],
    clients: &[User],
) -> AdvancedMetricsDto {
    AdvancedMetricsDto {
        period_days: days,
        metrics: AdvancedMetricsValuesDto {
            bonus_conversion_ratio: metric(
                round1(bonus_conversion_ratio(executed_created)),
                "percent",
                "Percentage of bonus issued that was converted to cash",
            ),
            avg_multiplier_reached: metric(
                round2(avg_multiplier_reached(executed_created)),
                "x",
                "Average withdrawal / deposit ratio for users who withdrew",
            ),
            avg_deposit_to_withdrawal_hours: metric(
                round1(avg_deposit_to_withdrawal_hours(executed_approved)),
                "hours",
                "Average time between first deposit and first withdrawal",
            ),
            clients_never_withdrawing_pct: metric(
                round1(never_withdrawing_percent(executed_created)),
                "percent",
                "Percentage of depositing clients who never withdrew",
            ),
            bonus_only_players_pct: metric(
                round1(bonus_only_percent(clients)),
                "percent",
                "Percentage of active clients with only bonus balance",
            ),
        },
    }
}
