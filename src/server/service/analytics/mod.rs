//! Admin analytics reports.
//!
//! The service loads the relevant rows through the repositories and hands them to the
//! pure builders in the submodules. Missing data folds to zero; only an unknown client
//! or game is an error.

pub mod entity;
pub mod exposure;
pub mod metrics;
pub mod snapshot;
pub mod trends;

use chrono::{DateTime, Duration, FixedOffset, Utc};
use sea_orm::DatabaseConnection;

use crate::{
    model::analytics::{
        AdvancedMetricsDto, ClientAnalyticsDto, GameAnalyticsDto, PlatformTrendsDto,
        RiskExposureDto, RiskSnapshotDto,
    },
    server::{
        data::{
            game::GameRepository, order::OrderRepository,
            referral_earning::ReferralEarningRepository, settings::SettingsRepository,
            user::UserRepository,
        },
        error::{referral::ReferralError, AppError},
        util::timezone::last_n_days,
    },
};

/// Trailing window for the risk max figure.
const RISK_WINDOW_HOURS: i64 = 24;

pub struct AnalyticsService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AnalyticsService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Dashboard snapshot: client balances, 24h risk max and cashout pressure.
    pub async fn risk_snapshot(&self, at: DateTime<Utc>) -> Result<RiskSnapshotDto, AppError> {
        let clients = UserRepository::new(self.db).get_active_clients().await?;
        let order_repo = OrderRepository::new(self.db);
        let recent = order_repo
            .get_approved_between(at - Duration::hours(RISK_WINDOW_HOURS), at)
            .await?;
        let pending = order_repo.get_pending_withdrawals().await?;
        let multipliers = SettingsRepository::new(self.db)
            .get_cashout_multipliers()
            .await?;

        Ok(snapshot::build_risk_snapshot(
            &clients,
            &recent,
            &pending,
            multipliers,
        ))
    }

    /// Daily trend buckets for the last `days` local days ending today in `offset`.
    ///
    /// `days` must already be clamped by the caller.
    pub async fn platform_trends(
        &self,
        at: DateTime<Utc>,
        offset: FixedOffset,
        days: u32,
    ) -> Result<PlatformTrendsDto, AppError> {
        let ranges = last_n_days(at, offset, days);
        let (Some(first), Some(last)) = (ranges.first(), ranges.last()) else {
            return Ok(trends::build_platform_trends(&[], &[], &[]));
        };

        let orders = OrderRepository::new(self.db)
            .get_approved_between(first.start, last.end)
            .await?;
        let earnings = ReferralEarningRepository::new(self.db)
            .get_paid_between(first.start, last.end)
            .await?;

        Ok(trends::build_platform_trends(&ranges, &orders, &earnings))
    }

    /// Platform-wide exposure, bonus risk and the client and game risk tables.
    pub async fn risk_exposure(&self) -> Result<RiskExposureDto, AppError> {
        let clients = UserRepository::new(self.db).get_active_clients().await?;
        let games = GameRepository::new(self.db).get_all().await?;
        let order_repo = OrderRepository::new(self.db);
        let game_orders = order_repo.get_with_game().await?;
        let executed = order_repo.get_executed().await?;
        let multipliers = SettingsRepository::new(self.db)
            .get_cashout_multipliers()
            .await?;

        Ok(exposure::build_risk_exposure(
            &clients,
            &games,
            &game_orders,
            &executed,
            multipliers,
        ))
    }

    /// Drill-down for one account.
    ///
    /// # Returns
    /// - `Ok(ClientAnalyticsDto)` - The report
    /// - `Err(ReferralError::UserNotFound)` - No such user
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn client_analytics(&self, user_id: &str) -> Result<ClientAnalyticsDto, AppError> {
        let Some(user) = UserRepository::new(self.db).find_by_id(user_id).await? else {
            return Err(ReferralError::UserNotFound(user_id.to_string()).into());
        };
        let orders = OrderRepository::new(self.db).get_by_user(user_id).await?;
        let multipliers = SettingsRepository::new(self.db)
            .get_cashout_multipliers()
            .await?;

        Ok(entity::build_client_analytics(&user, &orders, multipliers))
    }

    /// Drill-down for one game.
    ///
    /// # Returns
    /// - `Ok(GameAnalyticsDto)` - The report
    /// - `Err(ReferralError::GameNotFound)` - No such game
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn game_analytics(
        &self,
        game_name: &str,
        at: DateTime<Utc>,
    ) -> Result<GameAnalyticsDto, AppError> {
        let Some(game) = GameRepository::new(self.db).find_by_name(game_name).await? else {
            return Err(ReferralError::GameNotFound(game_name.to_string()).into());
        };
        let orders = OrderRepository::new(self.db).get_by_game(game_name).await?;

        let mut player_ids: Vec<String> = orders.iter().map(|o| o.user_id.clone()).collect();
        player_ids.sort();
        player_ids.dedup();
        let players = UserRepository::new(self.db)
            .get_clients_by_ids(&player_ids)
            .await?;

        let multipliers = SettingsRepository::new(self.db)
            .get_cashout_multipliers()
            .await?;

        Ok(entity::build_game_analytics(
            &game,
            &orders,
            &players,
            multipliers,
            at,
        ))
    }

    /// Efficiency metrics over the last `days` days before `at`.
    pub async fn advanced_metrics(
        &self,
        at: DateTime<Utc>,
        days: u32,
    ) -> Result<AdvancedMetricsDto, AppError> {
        let since = at - Duration::days(days as i64);
        let order_repo = OrderRepository::new(self.db);
        let executed_created = order_repo.get_executed_created_since(since).await?;
        let executed_approved = order_repo.get_executed_approved_since(since).await?;
        let clients = UserRepository::new(self.db).get_active_clients().await?;

        Ok(metrics::build_advanced_metrics(
            days,
            &executed_created,
            &executed_approved,
            &clients,
        ))
    }
}
