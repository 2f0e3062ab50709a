use chrono::{TimeZone, Utc};
use sea_orm::{EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

use crate::{
    error::AppError,
    model::game::{GameMode, GameParams},
    service::game::GameService,
};

fn valid_params(system_requirement_id: i32) -> GameParams {
    GameParams {
        mode: Some("pvp".to_string()),
        release_date: Some(Utc.with_ymd_and_hms(2020, 11, 12, 22, 57, 43).unwrap()),
        developer: Some("Monolith".to_string()),
        system_requirement_id: Some(system_requirement_id),
    }
}

/// Creating with valid params adds exactly one game.
#[tokio::test]
async fn create_with_valid_params_adds_game() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let requirement = factory::create_system_requirement(db).await?;

    let game = GameService::new(db)
        .create(valid_params(requirement.id))
        .await?;

    assert_eq!(game.mode, GameMode::Pvp);
    assert_eq!(game.developer, "Monolith");
    assert_eq!(game.system_requirement_id, requirement.id);
    assert_eq!(entity::prelude::Game::find().count(db).await?, 1);

    Ok(())
}

/// Missing required fields: one error key per field, nothing persisted.
#[tokio::test]
async fn create_with_missing_fields_keys_each_error() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = GameService::new(db).create(GameParams::default()).await;

    let Err(AppError::Validation(errors)) = result else {
        panic!("expected validation error");
    };
    for field in ["mode", "release_date", "developer", "system_requirement"] {
        assert!(errors.contains(field), "missing error for {}", field);
    }
    assert_eq!(entity::prelude::Game::find().count(db).await?, 0);

    Ok(())
}

/// Modes outside the enum are rejected.
#[tokio::test]
async fn create_rejects_unknown_mode() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let requirement = factory::create_system_requirement(db).await?;
    let params = GameParams {
        mode: Some("coop".to_string()),
        ..valid_params(requirement.id)
    };
    let result = GameService::new(db).create(params).await;

    let Err(AppError::Validation(errors)) = result else {
        panic!("expected validation error");
    };
    assert!(errors.contains("mode"));

    Ok(())
}

/// The referenced system requirement must exist.
#[tokio::test]
async fn create_rejects_unknown_system_requirement() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = GameService::new(db).create(valid_params(42)).await;

    let Err(AppError::Validation(errors)) = result else {
        panic!("expected validation error");
    };
    assert!(errors.contains("system_requirement"));
    assert_eq!(entity::prelude::Game::find().count(db).await?, 0);

    Ok(())
}

/// Updating one field leaves every other field at its prior value.
#[tokio::test]
async fn update_changes_only_supplied_fields() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let game = factory::create_game(db).await?;

    let params = GameParams {
        developer: Some("New Studio".to_string()),
        ..Default::default()
    };
    let updated = GameService::new(db).update(game.id, params).await?.unwrap();

    assert_eq!(updated.developer, "New Studio");
    assert_eq!(updated.mode.as_str(), game.mode);
    assert_eq!(updated.system_requirement_id, game.system_requirement_id);

    Ok(())
}

/// Updating an unknown id reports not-found.
#[tokio::test]
async fn update_unknown_id_returns_none() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = GameService::new(db)
        .update(
            42,
            GameParams {
                developer: Some("Nobody".to_string()),
                ..Default::default()
            },
        )
        .await?;

    assert!(result.is_none());

    Ok(())
}

/// Destroy removes exactly one game.
#[tokio::test]
async fn destroy_removes_one_game() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let game = factory::create_game(db).await?;
    factory::create_game(db).await?;

    let deleted = GameService::new(db).destroy(game.id).await?;

    assert!(deleted);
    assert_eq!(entity::prelude::Game::find().count(db).await?, 1);

    Ok(())
}
