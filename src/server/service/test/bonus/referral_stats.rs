use super::*;
use test_utils::factory::user::UserFactory;

/// Tests active referrals only count active accounts that deposited.
///
/// Expected: 3 total, 1 active
#[tokio::test]
async fn counts_total_and_active_referrals() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_referral_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let referrer = factory::create_user(db).await?;
    UserFactory::new(db)
        .referred_by(&referrer.user_id)
        .totals(50.0, 0.0)
        .build()
        .await?;
    UserFactory::new(db)
        .referred_by(&referrer.user_id)
        .totals(50.0, 0.0)
        .is_active(false)
        .build()
        .await?;
    UserFactory::new(db)
        .referred_by(&referrer.user_id)
        .build()
        .await?;

    let stats = BonusService::new(db)
        .referral_stats(&referrer.user_id)
        .await?;

    assert_eq!(stats.total_referrals, 3);
    assert_eq!(stats.active_referrals, 1);

    Ok(())
}
