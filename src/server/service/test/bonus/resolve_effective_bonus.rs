use super::*;

/// Tests tier band edges with the default table.
///
/// Expected: 0 and 6 -> 10%, 7 and 14 -> 15%, 15 -> 20%, 49 -> 25%, 50 and 200 -> 30%
#[tokio::test]
async fn resolves_tier_at_band_edges() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_referral_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::seed_default_tiers(db).await?;

    let service = BonusService::new(db);
    for (count, expected) in [
        (0, 10.0),
        (6, 10.0),
        (7, 15.0),
        (14, 15.0),
        (15, 20.0),
        (49, 25.0),
        (50, 30.0),
        (200, 30.0),
    ] {
        let referrer = factory::create_user(db).await?;
        factory::create_referrals(db, &referrer.user_id, count).await?;

        let bonus = service
            .resolve_effective_bonus(&referrer.user_id, reference_time())
            .await?;

        assert_eq!(bonus.percentage(), expected, "{} referrals", count);
        assert_eq!(bonus.source(), BonusSource::Tier);
        assert_eq!(bonus.referral_count, count as u64);
    }

    Ok(())
}

/// Tests the full precedence sequence for one referrer with 10 referrals.
///
/// Expected: 15% tier, then 40% individual override, then 25% campaign once the
/// override is gone, then 15% tier again once the campaign is deactivated
#[tokio::test]
async fn follows_precedence_as_sources_change() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_referral_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::seed_default_tiers(db).await?;
    let referrer = factory::create_user(db).await?;
    factory::create_referrals(db, &referrer.user_id, 10).await?;
    let service = BonusService::new(db);
    let at = reference_time();

    let bonus = service
        .resolve_effective_bonus(&referrer.user_id, at)
        .await?;
    assert_eq!(bonus.percentage(), 15.0);
    assert_eq!(bonus.source(), BonusSource::Tier);

    factory::create_client_override(db, &referrer.user_id, 40.0).await?;
    let bonus = service
        .resolve_effective_bonus(&referrer.user_id, at)
        .await?;
    assert_eq!(bonus.percentage(), 40.0);
    assert_eq!(bonus.source(), BonusSource::IndividualOverride);

    ClientOverrideService::new(db)
        .delete(&referrer.user_id)
        .await?;
    let campaign = GlobalOverrideFactory::new(db)
        .bonus_percentage(25.0)
        .build()
        .await?;
    let bonus = service
        .resolve_effective_bonus(&referrer.user_id, at)
        .await?;
    assert_eq!(bonus.percentage(), 25.0);
    assert_eq!(bonus.source(), BonusSource::GlobalCampaign);
    assert_eq!(
        bonus.campaign().map(|c| c.override_id.as_str()),
        Some(campaign.override_id.as_str())
    );

    let deactivated = GlobalOverrideParams {
        name: campaign.name,
        bonus_percentage: campaign.bonus_percentage,
        start_date: campaign.start_date,
        end_date: campaign.end_date,
        description: campaign.description,
        is_active: false,
    };
    GlobalOverrideService::new(db)
        .update(&campaign.override_id, deactivated, at)
        .await?;
    let bonus = service
        .resolve_effective_bonus(&referrer.user_id, at)
        .await?;
    assert_eq!(bonus.percentage(), 15.0);
    assert_eq!(bonus.source(), BonusSource::Tier);

    Ok(())
}

/// Tests an individual override beats a higher running campaign.
///
/// Expected: the override percentage, even though the campaign is larger
#[tokio::test]
async fn individual_override_beats_campaign() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_referral_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::seed_default_tiers(db).await?;
    let user = factory::create_user(db).await?;
    factory::create_client_override(db, &user.user_id, 12.0).await?;
    factory::create_global_override(db, 50.0).await?;

    let bonus = BonusService::new(db)
        .resolve_effective_bonus(&user.user_id, reference_time())
        .await?;

    assert_eq!(bonus.percentage(), 12.0);
    assert_eq!(bonus.source(), BonusSource::IndividualOverride);

    Ok(())
}

/// Tests an override expiring exactly at the evaluation instant no longer applies.
///
/// Expected: applies one second before expiry, tier at the expiry instant
#[tokio::test]
async fn override_expires_at_its_expiry_instant() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_referral_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::seed_default_tiers(db).await?;
    let user = factory::create_user(db).await?;
    let expires_at = reference_time() + Duration::hours(1);
    ClientOverrideFactory::new(db, &user.user_id)
        .bonus_percentage(45.0)
        .expires_at(Some(expires_at))
        .build()
        .await?;
    let service = BonusService::new(db);

    let before = service
        .resolve_effective_bonus(&user.user_id, expires_at - Duration::seconds(1))
        .await?;
    let at_expiry = service
        .resolve_effective_bonus(&user.user_id, expires_at)
        .await?;

    assert_eq!(before.source(), BonusSource::IndividualOverride);
    assert_eq!(at_expiry.source(), BonusSource::Tier);
    assert_eq!(at_expiry.percentage(), 10.0);

    Ok(())
}

/// Tests an inactive override is ignored.
///
/// Expected: tier source
#[tokio::test]
async fn ignores_inactive_override() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_referral_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::seed_default_tiers(db).await?;
    let user = factory::create_user(db).await?;
    ClientOverrideFactory::new(db, &user.user_id)
        .is_active(false)
        .build()
        .await?;

    let bonus = BonusService::new(db)
        .resolve_effective_bonus(&user.user_id, reference_time())
        .await?;

    assert_eq!(bonus.source(), BonusSource::Tier);

    Ok(())
}

/// Tests campaigns outside their window do not apply.
///
/// Expected: campaign applies on its inclusive bounds, tier one second outside
#[tokio::test]
async fn campaign_window_is_inclusive() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_referral_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::seed_default_tiers(db).await?;
    let user = factory::create_user(db).await?;
    let start = reference_time();
    let end = reference_time() + Duration::days(2);
    GlobalOverrideFactory::new(db)
        .bonus_percentage(22.0)
        .window(start, end)
        .build()
        .await?;
    let service = BonusService::new(db);

    for (at, expected) in [
        (start - Duration::seconds(1), BonusSource::Tier),
        (start, BonusSource::GlobalCampaign),
        (end, BonusSource::GlobalCampaign),
        (end + Duration::seconds(1), BonusSource::Tier),
    ] {
        let bonus = service.resolve_effective_bonus(&user.user_id, at).await?;
        assert_eq!(bonus.source(), expected, "at {}", at);
    }

    Ok(())
}

/// Tests the highest of several running campaigns wins.
///
/// Expected: 30% campaign
#[tokio::test]
async fn highest_running_campaign_wins() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_referral_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    factory::create_global_override(db, 18.0).await?;
    factory::create_global_override(db, 30.0).await?;
    factory::create_global_override(db, 24.0).await?;

    let bonus = BonusService::new(db)
        .resolve_effective_bonus(&user.user_id, reference_time())
        .await?;

    assert_eq!(bonus.percentage(), 30.0);

    Ok(())
}

/// Tests an empty tier table falls back to the default percentage.
///
/// Expected: 10% with source default and no provenance
#[tokio::test]
async fn falls_back_to_default_without_tiers() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_referral_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    factory::create_referrals(db, &user.user_id, 3).await?;

    let bonus = BonusService::new(db)
        .resolve_effective_bonus(&user.user_id, reference_time())
        .await?;

    assert_eq!(bonus.percentage(), 10.0);
    assert_eq!(bonus.source(), BonusSource::Default);
    assert!(bonus.provenance.is_none());
    assert_eq!(bonus.referral_count, 3);

    Ok(())
}

/// Tests resolution twice at the same instant gives the same answer.
///
/// Expected: identical results
#[tokio::test]
async fn is_idempotent_at_fixed_instant() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_referral_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::seed_default_tiers(db).await?;
    let user = factory::create_user(db).await?;
    factory::create_referrals(db, &user.user_id, 20).await?;
    factory::create_global_override(db, 27.0).await?;
    let service = BonusService::new(db);

    let first = service
        .resolve_effective_bonus(&user.user_id, reference_time())
        .await?;
    let second = service
        .resolve_effective_bonus(&user.user_id, reference_time())
        .await?;

    assert_eq!(first, second);

    Ok(())
}

/// Tests resolving for a user that does not exist.
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

    factory::seed_default_tiers(db).await?;

    let result = BonusService::new(db)
        .resolve_effective_bonus("ghost", reference_time())
        .await;

    assert!(matches!(
        result,
        Err(AppError::ReferralErr(ReferralError::UserNotFound(_)))
    ));

    Ok(())
}
