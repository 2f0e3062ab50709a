use sea_orm::{EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

use crate::{
    error::AppError,
    model::system_requirement::SystemRequirementParams,
    service::system_requirement::SystemRequirementService,
};

fn valid_params() -> SystemRequirementParams {
    SystemRequirementParams {
        name: Some("Basic".to_string()),
        operational_system: Some("Windows 10".to_string()),
        storage: Some("500 GB".to_string()),
        processor: Some("Intel Core i5".to_string()),
        memory: Some("8 GB".to_string()),
        video_board: Some("GeForce GTX 1060".to_string()),
    }
}

/// Creating with valid params adds exactly one requirement.
#[tokio::test]
async fn create_with_valid_params_adds_requirement() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::SystemRequirement)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let requirement = SystemRequirementService::new(db)
        .create(valid_params())
        .await?;

    assert_eq!(requirement.name, "Basic");
    assert_eq!(
        entity::prelude::SystemRequirement::find().count(db).await?,
        1
    );

    Ok(())
}

/// Missing required fields: one error key per field, nothing persisted.
#[tokio::test]
async fn create_with_missing_fields_keys_each_error() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::SystemRequirement)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = SystemRequirementService::new(db)
        .create(SystemRequirementParams::default())
        .await;

    let Err(AppError::Validation(errors)) = result else {
        panic!("expected validation error");
    };
    for field in [
        "name",
        "operational_system",
        "storage",
        "processor",
        "memory",
        "video_board",
    ] {
        assert!(errors.contains(field), "missing error for {}", field);
    }
    assert_eq!(
        entity::prelude::SystemRequirement::find().count(db).await?,
        0
    );

    Ok(())
}

/// Updating one field leaves every other field at its prior value.
#[tokio::test]
async fn update_changes_only_supplied_fields() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::SystemRequirement)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let requirement = factory::create_system_requirement(db).await?;

    let params = SystemRequirementParams {
        name: Some("My new SystemRequirement".to_string()),
        ..Default::default()
    };
    let updated = SystemRequirementService::new(db)
        .update(requirement.id, params)
        .await?
        .unwrap();

    assert_eq!(updated.name, "My new SystemRequirement");
    assert_eq!(updated.processor, requirement.processor);
    assert_eq!(updated.memory, requirement.memory);

    Ok(())
}

/// Updating an unknown id reports not-found.
#[tokio::test]
async fn update_unknown_id_returns_none() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::SystemRequirement)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = SystemRequirementService::new(db)
        .update(42, valid_params())
        .await?;

    assert!(result.is_none());

    Ok(())
}

/// Destroy removes exactly one requirement when nothing depends on it.
#[tokio::test]
async fn destroy_removes_one_requirement() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let requirement = factory::create_system_requirement(db).await?;

    let deleted = SystemRequirementService::new(db)
        .destroy(requirement.id)
        .await?;

    assert!(deleted);
    assert_eq!(
        entity::prelude::SystemRequirement::find().count(db).await?,
        0
    );

    Ok(())
}

/// A requirement referenced by games cannot be destroyed; the error carries
/// a base-keyed message and the row stays.
#[tokio::test]
async fn destroy_blocked_by_dependent_games() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (requirement, _game) = factory::helpers::create_game_with_requirement(db).await?;

    let result = SystemRequirementService::new(db)
        .destroy(requirement.id)
        .await;

    let Err(AppError::Validation(errors)) = result else {
        panic!("expected validation error");
    };
    assert!(errors.contains("base"));
    assert_eq!(
        entity::prelude::SystemRequirement::find().count(db).await?,
        1
    );

    Ok(())
}

/// Destroying an unknown id reports not-found.
#[tokio::test]
async fn destroy_unknown_id_returns_false() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let deleted = SystemRequirementService::new(db).destroy(42).await?;

    assert!(!deleted);

    Ok(())
}
