use super::*;

/// Tests seeding an empty table inserts the five default bands.
///
/// Expected: 5 inserted, Starter first and Ruby unbounded
#[tokio::test]
async fn seeds_empty_table() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_referral_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = TierService::new(db);
    let inserted = service.seed_defaults().await?;
    let tiers = service.list().await?;

    assert_eq!(inserted, 5);
    assert_eq!(tiers[0].tier_name, "Starter");
    assert_eq!(tiers[4].tier_name, "Ruby");
    assert!(tiers[4].max_referrals.is_none());

    Ok(())
}

/// Tests seeding leaves an existing table alone.
///
/// Expected: 0 inserted, only the existing tier present
#[tokio::test]
async fn skips_populated_table() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_referral_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_tier(db, 0, None, 12.0).await?;

    let service = TierService::new(db);
    let inserted = service.seed_defaults().await?;

    assert_eq!(inserted, 0);
    assert_eq!(service.list().await?.len(), 1);

    Ok(())
}
