use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

use crate::{
    data::user::UserRepository,
    model::user::{NewUser, Profile, UserChanges},
};

/// Tests inserting a user from finalized attributes.
///
/// Expected: Ok with the persisted row carrying the given values.
#[tokio::test]
async fn create_inserts_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .create(NewUser {
            name: "Alice".to_string(),
            email: "alice@example.com".to_string(),
            profile: Profile::Admin,
            password_digest: "digest".to_string(),
        })
        .await?;

    assert!(user.id > 0);
    assert_eq!(user.email, "alice@example.com");
    assert_eq!(user.profile, "admin");

    let stored = entity::prelude::User::find_by_id(user.id).one(db).await?;
    assert!(stored.is_some());

    Ok(())
}

/// Tests the uniqueness lookup with and without an excluded id.
///
/// Expected: taken for another record's email, not taken for the record's
/// own email when excluded.
#[tokio::test]
async fn email_taken_respects_exclusion() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .email("taken@example.com")
        .build()
        .await?;

    let repo = UserRepository::new(db);

    assert!(repo.email_taken("taken@example.com", None).await?);
    assert!(!repo.email_taken("taken@example.com", Some(user.id)).await?);
    assert!(!repo.email_taken("free@example.com", None).await?);

    Ok(())
}

/// Tests admin detection across profiles.
///
/// Expected: false with only client users, true once an admin exists.
#[tokio::test]
async fn admin_exists_checks_profile() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);

    factory::create_user_with_profile(db, "client").await?;
    assert!(!repo.admin_exists().await?);

    factory::create_user_with_profile(db, "admin").await?;
    assert!(repo.admin_exists().await?);

    Ok(())
}

/// Tests that an update touches only the supplied columns.
///
/// Expected: Ok with the name changed and everything else intact.
#[tokio::test]
async fn update_changes_only_supplied_columns() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let original_email = user.email.clone();
    let original_digest = user.password_digest.clone();

    let repo = UserRepository::new(db);
    let updated = repo
        .update(
            user.id,
            UserChanges {
                name: Some("Renamed".to_string()),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(updated.name, "Renamed");
    assert_eq!(updated.email, original_email);
    assert_eq!(updated.password_digest, original_digest);

    Ok(())
}

/// Tests deleting a user.
///
/// Expected: Ok with exactly one row gone.
#[tokio::test]
async fn delete_removes_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    repo.delete(user.id).await?;

    assert_eq!(entity::prelude::User::find().count(db).await?, 1);
    assert!(repo.get_by_id(user.id).await?.is_none());

    Ok(())
}
