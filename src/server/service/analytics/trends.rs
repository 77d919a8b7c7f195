//! Daily platform trend buckets.
//!
//! Orders are bucketed by `approved_at`, referral earnings by `created_at`. Totals are
//! summed from the unrounded bucket values and rounded once.

use std::collections::HashSet;

use crate::{
    model::analytics::{PlatformTrendsDto, TrendDayDto, TrendTotalsDto},
    server::{
        model::{analytics::ReferralEarning, order::Order},
        util::{number::round2, timezone::DayRange},
    },
};

/// Unrounded sums for one day.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DayTotals {
    pub deposits: f64,
    pub withdrawals_paid: f64,
    pub bonus_issued: f64,
    pub bonus_voided: f64,
    pub referral_earnings_paid: f64,
    pub active_clients: u64,
}

impl DayTotals {
    pub fn net_profit(&self) -> f64 {
        self.deposits - self.withdrawals_paid - self.referral_earnings_paid
    }

    /// Sums one day from approved orders and paid earnings, ignoring anything outside
    /// the range.
    pub fn collect(range: &DayRange, orders: &[Order], earnings: &[ReferralEarning]) -> Self {
        let mut totals = Self::default();
        let mut depositors = HashSet::new();

        for order in orders
            .iter()
            .filter(|o| o.is_approved() && o.approved_within(range.start, range.end))
        {
            if order.is_deposit() {
                totals.deposits += order.amount;
            }
            if order.is_withdrawal() {
                totals.withdrawals_paid += order.paid_amount();
            }
            if order.is_load() {
                totals.bonus_issued += order.bonus_issued();
                depositors.insert(order.user_id.as_str());
            }
            if order.void_amount > 0.0 {
                totals.bonus_voided += order.void_amount;
            }
        }

        totals.referral_earnings_paid = earnings
            .iter()
            .filter(|e| e.is_paid() && range.start <= e.created_at && e.created_at <= range.end)
            .map(|e| e.amount)
            .sum();
        totals.active_clients = depositors.len() as u64;

        totals
    }

    fn into_dto(self, date: String) -> TrendDayDto {
        TrendDayDto {
            date,
            deposits: round2(self.deposits),
            withdrawals_paid: round2(self.withdrawals_paid),
            bonus_issued: round2(self.bonus_issued),
            bonus_voided: round2(self.bonus_voided),
            net_profit: round2(self.net_profit()),
            referral_earnings_paid: round2(self.referral_earnings_paid),
            active_clients: self.active_clients,
        }
    }
}

/// Builds one bucket per day range, in the order given.
pub fn build_platform_trends(
    days: &[DayRange],
    orders: &[Order],
    earnings: &[ReferralEarning],
) -> PlatformTrendsDto {
    let mut data = Vec::with_capacity(days.len());
    let mut sum = DayTotals::default();

    for range in days {
        let day = DayTotals::collect(range, orders, earnings);

        sum.deposits += day.deposits;
        sum.withdrawals_paid += day.withdrawals_paid;
        sum.bonus_issued += day.bonus_issued;
        sum.bonus_voided += day.bonus_voided;
        sum.referral_earnings_paid += day.referral_earnings_paid;

        data.push(day.into_dto(range.label.clone()));
    }

    PlatformTrendsDto {
        days: days.len() as u32,
        data,
        totals: TrendTotalsDto {
            deposits: round2(sum.deposits),
            withdrawals_paid: round2(sum.withdrawals_paid),
            bonus_issued: round2(sum.bonus_issued),
            bonus_voided: round2(sum.bonus_voided),
            net_profit: round2(sum.net_profit()),
            referral_earnings_paid: round2(sum.referral_earnings_paid),
        },
    }
}
