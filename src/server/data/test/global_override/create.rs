use super::*;

/// Tests creating a campaign assigns an id and records the creator.
///
/// Expected: Ok with a UUID id and matching fields
#[tokio::test]
async fn creates_campaign() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ReferralGlobalOverride)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GlobalOverrideRepository::new(db);
    let created = repo
        .create(params(25.0), Some("admin-1".to_string()), reference_time())
        .await?;

    assert_eq!(created.override_id.len(), 36);
    assert_eq!(created.name, "Spring Boost");
    assert_eq!(created.bonus_percentage, 25.0);
    assert_eq!(created.created_by.as_deref(), Some("admin-1"));
    assert_eq!(created.created_at, reference_time());

    let stored = repo.find_by_id(&created.override_id).await?;
    assert_eq!(stored, Some(created));

    Ok(())
}
