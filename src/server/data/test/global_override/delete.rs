use super::*;

/// Tests deleting a campaign removes it and reports whether it existed.
///
/// Expected: Ok(true) then Ok(false)
#[tokio::test]
async fn deletes_campaign_once() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ReferralGlobalOverride)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let campaign = factory::create_global_override(db, 20.0).await?;
    let repo = GlobalOverrideRepository::new(db);

    assert!(repo.delete(&campaign.override_id).await?);
    assert!(!repo.delete(&campaign.override_id).await?);
    assert!(repo.get_all().await?.is_empty());

    Ok(())
}
