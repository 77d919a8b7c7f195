use super::*;

/// Tests overrides are listed newest first with the user's names.
///
/// Expected: Ok with two entries, newest first, usernames attached
#[tokio::test]
async fn lists_newest_first_with_usernames() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_referral_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let older_user = factory::user::UserFactory::new(db)
        .username("alice")
        .display_name("Alice")
        .build()
        .await?;
    let newer_user = factory::user::UserFactory::new(db)
        .username("bob")
        .build()
        .await?;

    factory::client_override::ClientOverrideFactory::new(db, &older_user.user_id)
        .created_at(reference_time() - Duration::days(5))
        .build()
        .await?;
    factory::client_override::ClientOverrideFactory::new(db, &newer_user.user_id)
        .created_at(reference_time() - Duration::days(1))
        .build()
        .await?;

    let entries = ClientOverrideRepository::new(db)
        .get_all_with_users()
        .await?;

    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].username.as_deref(), Some("bob"));
    assert_eq!(entries[0].display_name, None);
    assert_eq!(entries[1].username.as_deref(), Some("alice"));
    assert_eq!(entries[1].display_name.as_deref(), Some("Alice"));

    Ok(())
}
