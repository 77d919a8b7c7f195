use super::*;

/// Tests a valid update is applied.
///
/// Expected: Ok with the new percentage
#[tokio::test]
async fn applies_valid_update() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_referral_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::seed_default_tiers(db).await?;

    let tier = TierService::new(db)
        .update(silver(17.5, 7, Some(14)), reference_time())
        .await?;

    assert_eq!(tier.bonus_percentage, 17.5);
    assert_eq!(tier.updated_at, reference_time());

    Ok(())
}

/// Tests percentages outside 0..=100 are rejected before touching storage.
///
/// Expected: Err(InvalidPercentage), stored tier unchanged
#[tokio::test]
async fn rejects_out_of_range_percentage() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_referral_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::seed_default_tiers(db).await?;
    let service = TierService::new(db);

    let result = service
        .update(silver(120.0, 7, Some(14)), reference_time())
        .await;

    assert!(matches!(
        result,
        Err(AppError::ReferralErr(ReferralError::InvalidPercentage(_)))
    ));
    let tiers = service.list().await?;
    let stored = tiers.iter().find(|t| t.tier_id == "SILVER").unwrap();
    assert_eq!(stored.bonus_percentage, 15.0);

    Ok(())
}

/// Tests an upper bound below the lower bound is rejected.
///
/// Expected: Err(InvalidTierBounds)
#[tokio::test]
async fn rejects_inverted_bounds() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_referral_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::seed_default_tiers(db).await?;

    let result = TierService::new(db)
        .update(silver(15.0, 14, Some(7)), reference_time())
        .await;

    assert!(matches!(
        result,
        Err(AppError::ReferralErr(
            ReferralError::InvalidTierBounds { .. }
        ))
    ));

    Ok(())
}

/// Tests updating a tier id that does not exist.
///
/// Expected: Err(TierNotFound)
#[tokio::test]
async fn fails_for_unknown_tier() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_referral_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = TierService::new(db)
        .update(silver(15.0, 7, Some(14)), reference_time())
        .await;

    assert!(matches!(
        result,
        Err(AppError::ReferralErr(ReferralError::TierNotFound(_)))
    ));

    Ok(())
}
