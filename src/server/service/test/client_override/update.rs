use super::*;

/// Tests a patch changes only the fields it carries.
///
/// Expected: new percentage, reason and expiry untouched
#[tokio::test]
async fn patches_only_given_fields() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_referral_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let service = ClientOverrideService::new(db);
    let created = service
        .create(params(&user.user_id, 35.0), reference_time())
        .await?;

    let patch = PatchClientOverrideParams {
        bonus_percentage: Some(42.0),
        ..Default::default()
    };
    let entry = service
        .update(&user.user_id, patch, reference_time())
        .await?;

    assert_eq!(entry.client_override.bonus_percentage, 42.0);
    assert_eq!(entry.client_override.reason, "Affiliate deal");
    assert_eq!(
        entry.client_override.expires_at,
        created.entry.client_override.expires_at
    );

    Ok(())
}

/// Tests patching a user with no override.
///
/// Expected: Err(ClientOverrideNotFound)
#[tokio::test]
async fn fails_without_override() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_referral_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let result = ClientOverrideService::new(db)
        .update(
            &user.user_id,
            PatchClientOverrideParams::default(),
            reference_time(),
        )
        .await;

    assert!(matches!(
        result,
        Err(AppError::ReferralErr(
            ReferralError::ClientOverrideNotFound(_)
        ))
    ));

    Ok(())
}

/// Tests a patch that blanks out the reason.
///
/// Expected: Err(MissingReason), stored reason unchanged
#[tokio::test]
async fn rejects_blank_reason() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_referral_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let service = ClientOverrideService::new(db);
    service
        .create(params(&user.user_id, 35.0), reference_time())
        .await?;

    let patch = PatchClientOverrideParams {
        reason: Some(" ".to_string()),
        ..Default::default()
    };
    let result = service.update(&user.user_id, patch, reference_time()).await;

    assert!(matches!(
        result,
        Err(AppError::ReferralErr(ReferralError::MissingReason))
    ));
    assert_eq!(
        service.list().await?[0].client_override.reason,
        "Affiliate deal"
    );

    Ok(())
}
