use super::*;

/// Tests only provided fields change.
///
/// Expected: Ok(Some) with the new percentage and the original reason
#[tokio::test]
async fn updates_only_provided_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_referral_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    factory::create_client_override(db, &user.user_id, 40.0).await?;

    let at = reference_time();
    let patched = ClientOverrideRepository::new(db)
        .patch(
            &user.user_id,
            PatchClientOverrideParams {
                bonus_percentage: Some(45.0),
                ..Default::default()
            },
            at,
        )
        .await?;

    assert!(patched.is_some());
    let patched = patched.unwrap();
    assert_eq!(patched.bonus_percentage, 45.0);
    assert_eq!(patched.reason, "VIP partner");
    assert!(patched.is_active);
    assert_eq!(patched.updated_at, at);

    Ok(())
}

/// Tests patching a user without an override reports absence.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_without_override() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_referral_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let patched = ClientOverrideRepository::new(db)
        .patch(
            &user.user_id,
            PatchClientOverrideParams {
                is_active: Some(false),
                ..Default::default()
            },
            reference_time(),
        )
        .await?;

    assert!(patched.is_none());

    Ok(())
}
