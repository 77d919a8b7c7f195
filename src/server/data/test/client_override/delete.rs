use super::*;

/// Tests deleting removes the user's override and reports whether it existed.
///
/// Expected: Ok(true) then Ok(false)
#[tokio::test]
async fn deletes_override_once() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_referral_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    factory::create_client_override(db, &user.user_id, 40.0).await?;

    let repo = ClientOverrideRepository::new(db);

    assert!(repo.delete(&user.user_id).await?);
    assert!(!repo.delete(&user.user_id).await?);
    assert!(repo.find_by_user(&user.user_id).await?.is_none());

    Ok(())
}
