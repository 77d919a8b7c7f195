use super::*;

/// Tests the snapshot over a small platform with the configured multiplier.
///
/// Expected: balances of active clients only, risk max from the largest recent load,
/// high pressure from the pending withdrawal
#[tokio::test]
async fn folds_balances_risk_and_pressure() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_analytics_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = reference_time();
    factory::create_settings(db, 2.0, 1.0).await?;
    let client = UserFactory::new(db)
        .balances(100.0, 50.0, 10.0)
        .build()
        .await?;
    UserFactory::new(db)
        .balances(1000.0, 0.0, 0.0)
        .is_active(false)
        .build()
        .await?;
    UserFactory::new(db)
        .admin()
        .balances(5000.0, 0.0, 0.0)
        .build()
        .await?;
    OrderFactory::new(db, &client.user_id)
        .order_type("game_load")
        .status("approved")
        .amount(40.0)
        .at(now - Duration::hours(2))
        .build()
        .await?;
    OrderFactory::new(db, &client.user_id)
        .order_type("game_load")
        .status("approved")
        .amount(500.0)
        .at(now - Duration::hours(30))
        .build()
        .await?;
    OrderFactory::new(db, &client.user_id)
        .order_type("withdrawal")
        .status("pending_review")
        .amount(90.0)
        .at(now - Duration::hours(1))
        .unapproved()
        .build()
        .await?;

    let snapshot = AnalyticsService::new(db).risk_snapshot(now).await?;

    assert_eq!(snapshot.total_client_balance.combined, 160.0);
    assert_eq!(snapshot.risk_max_24h.amount, 80.0);
    assert_eq!(snapshot.risk_max_24h.max_multiplier_used, 2.0);
    assert_eq!(snapshot.probable_max_cashout.amount, 80.0);
    assert_eq!(snapshot.cashout_pressure.pending_count, 1);
    assert_eq!(snapshot.cashout_pressure.pending_amount, 90.0);
    assert_eq!(snapshot.cashout_pressure.pressure_ratio_percent, 56.3);
    assert_eq!(
        snapshot.cashout_pressure.indicator,
        PressureIndicatorDto::High
    );

    Ok(())
}

/// Tests an empty platform with no settings row.
///
/// Expected: zeroes everywhere, default multiplier 3, low pressure
#[tokio::test]
async fn empty_platform_is_all_zero() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_analytics_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let snapshot = AnalyticsService::new(db)
        .risk_snapshot(reference_time())
        .await?;

    assert_eq!(snapshot.total_client_balance.combined, 0.0);
    assert_eq!(snapshot.risk_max_24h.amount, 0.0);
    assert_eq!(snapshot.risk_max_24h.max_multiplier_used, 3.0);
    assert_eq!(snapshot.cashout_pressure.pressure_ratio_percent, 0.0);
    assert_eq!(
        snapshot.cashout_pressure.indicator,
        PressureIndicatorDto::Low
    );

    Ok(())
}
