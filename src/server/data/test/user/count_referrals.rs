use super::*;

/// Tests the referral count reflects linked accounts at query time.
///
/// Expected: Ok(0) before and Ok(3) after three referrals sign up
#[tokio::test]
async fn counts_linked_accounts_live() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let referrer = factory::create_user(db).await?;
    let repo = UserRepository::new(db);

    assert_eq!(repo.count_referrals(&referrer.user_id).await?, 0);

    factory::create_referrals(db, &referrer.user_id, 3).await?;
    factory::create_user(db).await?;

    assert_eq!(repo.count_referrals(&referrer.user_id).await?, 3);

    Ok(())
}

/// Tests active referrals require an active account that has deposited.
///
/// Expected: Ok(1) active out of three referrals
#[tokio::test]
async fn counts_only_active_depositing_referrals() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let referrer = factory::create_user(db).await?;

    factory::user::UserFactory::new(db)
        .referred_by(&referrer.user_id)
        .totals(50.0, 0.0)
        .build()
        .await?;
    factory::user::UserFactory::new(db)
        .referred_by(&referrer.user_id)
        .totals(50.0, 0.0)
        .is_active(false)
        .build()
        .await?;
    factory::user::UserFactory::new(db)
        .referred_by(&referrer.user_id)
        .build()
        .await?;

    let repo = UserRepository::new(db);

    assert_eq!(repo.count_referrals(&referrer.user_id).await?, 3);
    assert_eq!(repo.count_active_referrals(&referrer.user_id).await?, 1);

    Ok(())
}
