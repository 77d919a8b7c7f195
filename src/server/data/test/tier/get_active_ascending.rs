use super::*;

/// Tests active tiers come back ordered by minimum, inactive ones skipped.
///
/// Expected: Ok with ascending active tiers only
#[tokio::test]
async fn returns_active_tiers_in_ascending_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ReferralTier)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_tier(db, 30, None, 25.0).await?;
    factory::create_tier(db, 0, Some(9), 10.0).await?;
    factory::referral_tier::TierFactory::new(db)
        .bounds(10, Some(29))
        .is_active(false)
        .build()
        .await?;

    let repo = TierRepository::new(db);
    let active = repo.get_active_ascending().await?;
    let all = repo.get_all().await?;

    assert_eq!(
        active.iter().map(|t| t.min_referrals).collect::<Vec<_>>(),
        vec![0, 30]
    );
    assert_eq!(
        all.iter().map(|t| t.min_referrals).collect::<Vec<_>>(),
        vec![0, 10, 30]
    );

    Ok(())
}
