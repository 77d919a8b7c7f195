use super::*;

/// Tests an override expiring exactly now is no longer active.
///
/// Expected: Ok(None) at expiry, Ok(Some) one second before
#[tokio::test]
async fn treats_expiry_at_now_as_expired() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_referral_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let now = reference_time();
    factory::client_override::ClientOverrideFactory::new(db, &user.user_id)
        .expires_at(Some(now))
        .build()
        .await?;

    let repo = ClientOverrideRepository::new(db);

    assert!(repo
        .find_active_for_user(&user.user_id, now)
        .await?
        .is_none());
    assert!(repo
        .find_active_for_user(&user.user_id, now - Duration::seconds(1))
        .await?
        .is_some());

    Ok(())
}

/// Tests a deactivated override is ignored while the record persists.
///
/// Expected: Ok(None) from the active lookup, Ok(Some) from the plain lookup
#[tokio::test]
async fn ignores_deactivated_override() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_referral_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    factory::client_override::ClientOverrideFactory::new(db, &user.user_id)
        .is_active(false)
        .build()
        .await?;

    let repo = ClientOverrideRepository::new(db);

    assert!(repo
        .find_active_for_user(&user.user_id, reference_time())
        .await?
        .is_none());
    assert!(repo.find_by_user(&user.user_id).await?.is_some());

    Ok(())
}

/// Tests a never-expiring override stays active.
///
/// Expected: Ok(Some) with the stored percentage
#[tokio::test]
async fn returns_unexpiring_override() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_referral_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    factory::create_client_override(db, &user.user_id, 42.0).await?;

    let found = ClientOverrideRepository::new(db)
        .find_active_for_user(&user.user_id, reference_time() + Duration::days(3650))
        .await?;

    assert_eq!(found.map(|o| o.bonus_percentage), Some(42.0));

    Ok(())
}
