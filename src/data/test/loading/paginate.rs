use super::*;

/// Tests fetching an inner page with explicit page/length values.
///
/// Expected: Ok with the second slice of records and full counts.
#[tokio::test]
async fn returns_requested_page() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for i in 1..=5 {
        test_utils::factory::user::UserFactory::new(db)
            .name(format!("User {:02}", i))
            .build()
            .await?;
    }

    let params = LoadingParams {
        order: vec![("name".to_string(), SortDirection::Asc)],
        page: 2,
        length: 2,
        ..Default::default()
    };
    let page = ModelLoader::new(db)
        .load(entity::prelude::User::find(), &params)
        .await?;

    assert_eq!(page.records.len(), 2);
    assert_eq!(page.records[0].name, "User 03");
    assert_eq!(page.total, 5);
    assert_eq!(page.page, 2);
    assert_eq!(page.length, 2);
    assert_eq!(page.total_pages, 3);

    Ok(())
}

/// Tests fallback values for zeroed page/length parameters.
///
/// Expected: Ok with page 1 and the default page length.
#[tokio::test]
async fn zero_parameters_fall_back_to_defaults() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for _ in 0..3 {
        factory::create_user(db).await?;
    }

    let params = LoadingParams::default();
    let page = ModelLoader::new(db)
        .load(entity::prelude::User::find(), &params)
        .await?;

    assert_eq!(page.page, 1);
    assert_eq!(page.length, DEFAULT_PAGE_LENGTH);
    assert_eq!(page.records.len(), 3);
    assert_eq!(page.total_pages, 1);

    Ok(())
}

/// Tests requesting a page past the end of the collection.
///
/// Expected: Ok with no records but counts intact, not an error.
#[tokio::test]
async fn out_of_range_page_is_empty() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for _ in 0..3 {
        factory::create_user(db).await?;
    }

    let params = LoadingParams {
        page: 99,
        length: 2,
        ..Default::default()
    };
    let page = ModelLoader::new(db)
        .load(entity::prelude::User::find(), &params)
        .await?;

    assert!(page.records.is_empty());
    assert_eq!(page.total, 3);
    assert_eq!(page.total_pages, 2);

    Ok(())
}

/// Tests pagination of an empty collection.
///
/// Expected: Ok with no records and zeroed counts.
#[tokio::test]
async fn empty_collection_yields_empty_page() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let page = ModelLoader::new(db)
        .load(entity::prelude::User::find(), &LoadingParams::default())
        .await?;

    assert!(page.records.is_empty());
    assert_eq!(page.total, 0);
    assert_eq!(page.total_pages, 0);

    Ok(())
}
