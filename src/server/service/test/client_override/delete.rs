use super::*;

/// Tests deleting an override and then deleting it again.
///
/// Expected: first Ok, second Err(ClientOverrideNotFound)
#[tokio::test]
async fn deletes_once() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_referral_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    factory::create_client_override(db, &user.user_id, 40.0).await?;
    let service = ClientOverrideService::new(db);

    service.delete(&user.user_id).await?;
    let again = service.delete(&user.user_id).await;

    assert!(matches!(
        again,
        Err(AppError::ReferralErr(
            ReferralError::ClientOverrideNotFound(_)
        ))
    ));
    assert!(service.list().await?.is_empty());

    Ok(())
}
