use super::*;

/// Tests the client report for an account with executed history.
///
/// Expected: lifetime figures from executed deposit/withdrawal orders only
#[tokio::test]
async fn reports_client_lifetime() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_analytics_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = reference_time();
    let user = UserFactory::new(db)
        .balances(120.0, 30.0, 0.0)
        .totals(200.0, 60.0)
        .build()
        .await?;
    OrderFactory::new(db, &user.user_id)
        .amount(200.0)
        .bonus_amount(20.0)
        .at(now - Duration::days(3))
        .build()
        .await?;
    OrderFactory::new(db, &user.user_id)
        .order_type("withdrawal")
        .amount(70.0)
        .payout_amount(60.0)
        .void_amount(5.0)
        .at(now - Duration::days(1))
        .build()
        .await?;
    OrderFactory::new(db, &user.user_id)
        .status("pending")
        .amount(999.0)
        .at(now)
        .build()
        .await?;

    let report = AnalyticsService::new(db)
        .client_analytics(&user.user_id)
        .await?;

    assert_eq!(report.balances.total, 150.0);
    assert_eq!(report.lifetime_stats.deposits, 200.0);
    assert_eq!(report.lifetime_stats.withdrawals, 60.0);
    assert_eq!(report.lifetime_stats.bonus_received, 20.0);
    assert_eq!(report.lifetime_stats.voided, 5.0);
    assert_eq!(report.lifetime_stats.deposit_count, 1);
    assert_eq!(report.lifetime_stats.withdrawal_count, 1);
    assert_eq!(report.cashout_projection.max_eligible_cashout, 150.0);

    Ok(())
}

/// Tests unknown client and game lookups.
///
/// Expected: Err(UserNotFound) and Err(GameNotFound)
#[tokio::test]
async fn unknown_entities_are_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_analytics_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = AnalyticsService::new(db);
    let client = service.client_analytics("ghost").await;
    let game = service.game_analytics("nope", reference_time()).await;

    assert!(matches!(
        client,
        Err(AppError::ReferralErr(ReferralError::UserNotFound(_)))
    ));
    assert!(matches!(
        game,
        Err(AppError::ReferralErr(ReferralError::GameNotFound(_)))
    ));

    Ok(())
}

/// Tests the game report averages each player's balance once.
///
/// Expected: 2 players, average of 100 and 300, margin 75%
#[tokio::test]
async fn reports_game_players_and_margin() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_analytics_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = reference_time();
    factory::create_game(db, "slots").await?;
    let heavy = UserFactory::new(db)
        .balances(100.0, 0.0, 0.0)
        .build()
        .await?;
    let light = UserFactory::new(db)
        .balances(300.0, 0.0, 0.0)
        .build()
        .await?;
    for _ in 0..3 {
        OrderFactory::new(db, &heavy.user_id)
            .game("slots")
            .amount(100.0)
            .at(now - Duration::days(1))
            .build()
            .await?;
    }
    OrderFactory::new(db, &light.user_id)
        .game("slots")
        .order_type("withdrawal")
        .payout_amount(75.0)
        .at(now - Duration::days(20))
        .build()
        .await?;

    let report = AnalyticsService::new(db)
        .game_analytics("slots", now)
        .await?;

    assert_eq!(report.financial.total_deposits, 300.0);
    assert_eq!(report.financial.total_withdrawals, 75.0);
    assert_eq!(report.financial.profit_margin_percent, 75.0);
    assert_eq!(report.players.total, 2);
    assert_eq!(report.players.active_7d, 1);
    assert_eq!(report.players.avg_balance, 200.0);

    Ok(())
}

/// Tests advanced metrics over the trailing window.
///
/// Expected: conversion and multiplier from executed orders created in the window
#[tokio::test]
async fn computes_advanced_metrics() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_analytics_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = reference_time();
    let user = factory::create_user(db).await?;
    OrderFactory::new(db, &user.user_id)
        .amount(100.0)
        .bonus_amount(50.0)
        .bonus_consumed(10.0)
        .at(now - Duration::days(2))
        .build()
        .await?;
    OrderFactory::new(db, &user.user_id)
        .order_type("withdrawal")
        .payout_amount(150.0)
        .at(now - Duration::days(1))
        .build()
        .await?;
    OrderFactory::new(db, &user.user_id)
        .amount(1000.0)
        .at(now - Duration::days(60))
        .build()
        .await?;

    let report = AnalyticsService::new(db).advanced_metrics(now, 30).await?;

    assert_eq!(report.period_days, 30);
    assert_eq!(report.metrics.bonus_conversion_ratio.value, 20.0);
    assert_eq!(report.metrics.avg_multiplier_reached.value, 1.5);
    assert_eq!(report.metrics.avg_deposit_to_withdrawal_hours.value, 24.0);
    assert_eq!(report.metrics.clients_never_withdrawing_pct.value, 0.0);

    Ok(())
}
