use super::*;

/// Tests updating a tier replaces its fields and bumps `updated_at`.
///
/// Expected: Ok(Some) with the new values
#[tokio::test]
async fn replaces_tier_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ReferralTier)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::seed_default_tiers(db).await?;
    let at = reference_time() + Duration::days(3);

    let updated = TierRepository::new(db)
        .update(
            UpdateTierParams {
                tier_id: "SILVER".to_string(),
                tier_name: "Silver Plus".to_string(),
                min_referrals: 7,
                max_referrals: Some(14),
                bonus_percentage: 17.5,
                description: Some("Boosted".to_string()),
                is_active: true,
            },
            at,
        )
        .await?;

    assert!(updated.is_some());
    let updated = updated.unwrap();
    assert_eq!(updated.tier_name, "Silver Plus");
    assert_eq!(updated.bonus_percentage, 17.5);
    assert_eq!(updated.description.as_deref(), Some("Boosted"));
    assert_eq!(updated.updated_at, at);

    Ok(())
}

/// Tests updating a missing tier reports absence.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_tier() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ReferralTier)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let updated = TierRepository::new(db)
        .update(
            UpdateTierParams {
                tier_id: "DIAMOND".to_string(),
                tier_name: "Diamond".to_string(),
                min_referrals: 100,
                max_referrals: None,
                bonus_percentage: 35.0,
                description: None,
                is_active: true,
            },
            reference_time(),
        )
        .await?;

    assert!(updated.is_none());

    Ok(())
}
