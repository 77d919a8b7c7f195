use super::*;

/// Tests only paid statuses inside the range are returned.
///
/// Expected: Ok with the `paid` and `credited` earnings
#[tokio::test]
async fn returns_paid_earnings_in_range() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ReferralEarning)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = reference_time();
    factory::create_referral_earning(db, "user-1", 5.0, "paid", now).await?;
    factory::create_referral_earning(db, "user-1", 7.0, "credited", now).await?;
    factory::create_referral_earning(db, "user-1", 9.0, "pending", now).await?;
    factory::create_referral_earning(db, "user-1", 11.0, "paid", now - Duration::days(3)).await?;

    let earnings = ReferralEarningRepository::new(db)
        .get_paid_between(now - Duration::days(1), now)
        .await?;

    let total: f64 = earnings.iter().map(|e| e.amount).sum();
    assert_eq!(earnings.len(), 2);
    assert_eq!(total, 12.0);

    Ok(())
}
