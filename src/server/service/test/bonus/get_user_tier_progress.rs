use super::*;

/// Tests progress for a Silver referrer with no overrides.
///
/// Expected: current Silver 15%, next Gold 20%, 5 referrals to go, no promotion
#[tokio::test]
async fn reports_current_and_next_tier() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_referral_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::seed_default_tiers(db).await?;
    let user = factory::create_user(db).await?;
    factory::create_referrals(db, &user.user_id, 10).await?;

    let progress = BonusService::new(db)
        .get_user_tier_progress(&user.user_id, reference_time())
        .await?;
    let dto = progress.into_dto();

    assert_eq!(dto.referral_count, 10);
    assert_eq!(dto.current_tier, "Silver");
    assert_eq!(dto.current_tier_percentage, 15.0);
    assert_eq!(dto.effective_percentage, 15.0);
    assert_eq!(dto.next_tier.as_deref(), Some("Gold"));
    assert_eq!(dto.next_tier_percentage, Some(20.0));
    assert_eq!(dto.referrals_to_next, Some(5));
    assert!(!dto.promotion_active);
    assert_eq!(dto.all_tiers.len(), 5);

    Ok(())
}

/// Tests a running campaign is advertised when it decides the bonus.
///
/// Expected: effective 25% from the campaign, promotion active with its name
#[tokio::test]
async fn advertises_deciding_campaign() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_referral_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::seed_default_tiers(db).await?;
    let user = factory::create_user(db).await?;
    GlobalOverrideFactory::new(db)
        .name("Summer Surge")
        .bonus_percentage(25.0)
        .build()
        .await?;

    let dto = BonusService::new(db)
        .get_user_tier_progress(&user.user_id, reference_time())
        .await?
        .into_dto();

    assert_eq!(dto.effective_percentage, 25.0);
    assert_eq!(dto.current_tier_percentage, 10.0);
    assert!(dto.promotion_active);
    assert_eq!(dto.promotion_name.as_deref(), Some("Summer Surge"));

    Ok(())
}

/// Tests an individual override hides a running campaign.
///
/// Expected: effective 40% from the override, no promotion advertised
#[tokio::test]
async fn override_suppresses_promotion() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_referral_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::seed_default_tiers(db).await?;
    let user = factory::create_user(db).await?;
    factory::create_client_override(db, &user.user_id, 40.0).await?;
    factory::create_global_override(db, 25.0).await?;
    let service = BonusService::new(db);

    let progress = service
        .get_user_tier_progress(&user.user_id, reference_time())
        .await?;
    let resolved = service
        .resolve_effective_bonus(&user.user_id, reference_time())
        .await?;

    assert_eq!(progress.effective, resolved);
    let dto = progress.into_dto();
    assert_eq!(dto.effective_percentage, 40.0);
    assert!(!dto.promotion_active);
    assert!(dto.promotion_name.is_none());

    Ok(())
}

/// Tests a referrer in the top band has no next tier.
///
/// Expected: current Ruby, next tier and referrals to next absent
#[tokio::test]
async fn top_band_has_no_next_tier() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_referral_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::seed_default_tiers(db).await?;
    let user = factory::create_user(db).await?;
    factory::create_referrals(db, &user.user_id, 50).await?;

    let dto = BonusService::new(db)
        .get_user_tier_progress(&user.user_id, reference_time())
        .await?
        .into_dto();

    assert_eq!(dto.current_tier, "Ruby");
    assert!(dto.next_tier.is_none());
    assert!(dto.referrals_to_next.is_none());

    Ok(())
}

/// Tests progress with no tiers configured.
///
/// Expected: Starter at 10% with default source
#[tokio::test]
async fn defaults_to_starter_without_tiers() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_referral_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let progress = BonusService::new(db)
        .get_user_tier_progress(&user.user_id, reference_time())
        .await?;

    assert_eq!(progress.effective.source(), BonusSource::Default);
    let dto = progress.into_dto();
    assert_eq!(dto.current_tier, "Starter");
    assert_eq!(dto.current_tier_percentage, 10.0);
    assert!(dto.all_tiers.is_empty());

    Ok(())
}

/// Tests progress for a user that does not exist.
///
/// Expected: Err(UserNotFound)
#[tokio::test]
async fn fails_for_unknown_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_referral_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = BonusService::new(db)
        .get_user_tier_progress("ghost", reference_time())
        .await;

    assert!(matches!(
        result,
        Err(AppError::ReferralErr(ReferralError::UserNotFound(_)))
    ));

    Ok(())
}
