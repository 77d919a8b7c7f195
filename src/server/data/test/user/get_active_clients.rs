use super::*;

/// Tests admins and deactivated accounts are excluded from the client population.
///
/// Expected: Ok with only the active client
#[tokio::test]
async fn excludes_admins_and_inactive_accounts() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let client = factory::create_user(db).await?;
    factory::user::UserFactory::new(db).admin().build().await?;
    factory::user::UserFactory::new(db)
        .is_active(false)
        .build()
        .await?;

    let clients = UserRepository::new(db).get_active_clients().await?;

    assert_eq!(clients.len(), 1);
    assert_eq!(clients[0].user_id, client.user_id);

    Ok(())
}

/// Tests loading clients by id skips unknown ids and admins.
///
/// Expected: Ok with the single matching client
#[tokio::test]
async fn loads_clients_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let client = factory::create_user(db).await?;
    let admin = factory::user::UserFactory::new(db).admin().build().await?;

    let repo = UserRepository::new(db);
    let clients = repo
        .get_clients_by_ids(&[
            client.user_id.clone(),
            admin.user_id.clone(),
            "unknown".to_string(),
        ])
        .await?;

    assert_eq!(clients.len(), 1);
    assert_eq!(clients[0].user_id, client.user_id);
    assert!(repo.get_clients_by_ids(&[]).await?.is_empty());

    Ok(())
}
