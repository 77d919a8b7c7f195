use super::*;

/// Tests each bucket keeps the net profit identity and empty days are zero-filled.
///
/// Expected: 3 days oldest first, only the middle day populated,
/// net = deposits - withdrawals - referral earnings per day and in total
#[tokio::test]
async fn buckets_by_day_with_net_profit() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_analytics_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = reference_time();
    let yesterday = now - Duration::days(1);
    let user = factory::create_user(db).await?;
    OrderFactory::new(db, &user.user_id)
        .order_type("game_load")
        .status("approved")
        .amount(200.0)
        .total_amount(240.0)
        .at(yesterday)
        .build()
        .await?;
    OrderFactory::new(db, &user.user_id)
        .order_type("withdrawal_game")
        .status("paid")
        .amount(90.0)
        .payout_amount(80.0)
        .at(yesterday)
        .build()
        .await?;
    factory::create_referral_earning(db, &user.user_id, 15.0, "credited", yesterday).await?;
    factory::create_referral_earning(db, &user.user_id, 99.0, "pending", yesterday).await?;

    let trends = AnalyticsService::new(db)
        .platform_trends(now, offset_from_minutes_west(0), 3)
        .await?;

    assert_eq!(trends.days, 3);
    assert_eq!(trends.data.len(), 3);
    assert_eq!(trends.data[0].date, "2026-03-13");
    assert_eq!(trends.data[2].date, "2026-03-15");
    assert_eq!(trends.data[0].deposits, 0.0);
    assert_eq!(trends.data[2].active_clients, 0);

    let day = &trends.data[1];
    assert_eq!(day.deposits, 200.0);
    assert_eq!(day.withdrawals_paid, 80.0);
    assert_eq!(day.bonus_issued, 40.0);
    assert_eq!(day.referral_earnings_paid, 15.0);
    assert_eq!(day.net_profit, 105.0);
    assert_eq!(day.active_clients, 1);
    assert_eq!(trends.totals.net_profit, 105.0);

    Ok(())
}

/// Tests the client offset moves orders across local day boundaries.
///
/// Expected: an order at 02:00 UTC lands on the previous local day at UTC-5
#[tokio::test]
async fn honours_client_offset() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_analytics_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = reference_time();
    let early_utc = now - Duration::hours(10);
    let user = factory::create_user(db).await?;
    OrderFactory::new(db, &user.user_id)
        .order_type("deposit")
        .status("approved")
        .amount(50.0)
        .at(early_utc)
        .build()
        .await?;

    let trends = AnalyticsService::new(db)
        .platform_trends(now, offset_from_minutes_west(300), 2)
        .await?;

    assert_eq!(trends.data[0].date, "2026-03-14");
    assert_eq!(trends.data[0].deposits, 50.0);
    assert_eq!(trends.data[1].deposits, 0.0);

    Ok(())
}
