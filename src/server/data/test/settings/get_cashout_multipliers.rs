use super::*;

/// Tests the stored multipliers are returned.
///
/// Expected: Ok with max 5 and min 2
#[tokio::test]
async fn returns_stored_multipliers() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_analytics_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_settings(db, 5.0, 2.0).await?;

    let multipliers = SettingsRepository::new(db)
        .get_cashout_multipliers()
        .await?;

    assert_eq!(multipliers.max, 5.0);
    assert_eq!(multipliers.min, 2.0);

    Ok(())
}

/// Tests missing settings fall back to the 3x/1x defaults.
///
/// Expected: Ok with max 3 and min 1
#[tokio::test]
async fn falls_back_to_defaults() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_analytics_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let multipliers = SettingsRepository::new(db)
        .get_cashout_multipliers()
        .await?;

    assert_eq!(multipliers.max, 3.0);
    assert_eq!(multipliers.min, 1.0);

    Ok(())
}

/// Tests games are looked up by their unique name.
///
/// Expected: Ok(Some) for a known game, Ok(None) otherwise
#[tokio::test]
async fn finds_game_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_analytics_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_game(db, "firekirin").await?;

    let repo = GameRepository::new(db);
    let game = repo.find_by_name("firekirin").await?;

    assert_eq!(game.map(|g| g.display_name), Some("FIREKIRIN".to_string()));
    assert!(repo.find_by_name("unknown").await?.is_none());

    Ok(())
}
