use super::*;

/// Tests ascending and descending ordering on a whitelisted field.
///
/// Expected: Ok with records sorted by the requested direction.
#[tokio::test]
async fn orders_by_field_and_direction() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for name in ["Zoe", "Alice", "Bob"] {
        test_utils::factory::user::UserFactory::new(db)
            .name(name)
            .build()
            .await?;
    }

    let params = LoadingParams {
        order: vec![("name".to_string(), SortDirection::Asc)],
        ..Default::default()
    };
    let page = ModelLoader::new(db)
        .load(entity::prelude::User::find(), &params)
        .await?;
    let names: Vec<_> = page.records.iter().map(|u| u.name.as_str()).collect();
    assert_eq!(names, vec!["Alice", "Bob", "Zoe"]);

    let params = LoadingParams {
        order: vec![("name".to_string(), SortDirection::Desc)],
        ..Default::default()
    };
    let page = ModelLoader::new(db)
        .load(entity::prelude::User::find(), &params)
        .await?;
    let names: Vec<_> = page.records.iter().map(|u| u.name.as_str()).collect();
    assert_eq!(names, vec!["Zoe", "Bob", "Alice"]);

    Ok(())
}

/// Tests that order clauses on unknown fields are dropped.
///
/// Expected: Ok with the collection in its natural order.
#[tokio::test]
async fn ignores_unknown_order_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_user(db).await?;
    let second = factory::create_user(db).await?;

    let params = LoadingParams {
        order: vec![("password_digest".to_string(), SortDirection::Desc)],
        ..Default::default()
    };
    let page = ModelLoader::new(db)
        .load(entity::prelude::User::find(), &params)
        .await?;

    let ids: Vec<_> = page.records.iter().map(|u| u.id).collect();
    assert_eq!(ids, vec![first.id, second.id]);

    Ok(())
}
