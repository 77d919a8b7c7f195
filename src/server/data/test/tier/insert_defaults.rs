use super::*;

/// Tests the default bands are inserted into an empty table.
///
/// Expected: Ok(5) and five tiers from Starter to Ruby
#[tokio::test]
async fn inserts_five_default_tiers() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ReferralTier)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TierRepository::new(db);
    let inserted = repo.insert_defaults(reference_time()).await?;

    assert_eq!(inserted, 5);
    assert_eq!(repo.count().await?, 5);

    let tiers = repo.get_all().await?;
    assert_eq!(tiers[0].tier_name, "Starter");
    assert_eq!(tiers[4].tier_name, "Ruby");
    assert_eq!(tiers[4].max_referrals, None);
    assert!(tiers.iter().all(|t| t.is_active));

    Ok(())
}
