use super::*;

/// Tests case-insensitive substring matching.
///
/// Expected: Ok with only the records whose field contains the term,
/// regardless of letter case on either side.
#[tokio::test]
async fn matches_case_insensitive_substring() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::SystemRequirement)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for name in ["Basic Setup", "Advanced Rig", "basic plus"] {
        factory::system_requirement::SystemRequirementFactory::new(db)
            .name(name)
            .build()
            .await?;
    }

    let params = LoadingParams {
        search: vec![("name".to_string(), "BASIC".to_string())],
        ..Default::default()
    };
    let page = ModelLoader::new(db)
        .load(entity::prelude::SystemRequirement::find(), &params)
        .await?;

    assert_eq!(page.total, 2);
    assert!(page
        .records
        .iter()
        .all(|r| r.name.to_lowercase().contains("basic")));

    Ok(())
}

/// Tests that field names outside the whitelist never reach the query.
///
/// Expected: Ok with the full collection, the clause silently dropped.
#[tokio::test]
async fn ignores_unknown_search_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_user(db).await?;
    factory::create_user(db).await?;

    let params = LoadingParams {
        search: vec![("password_digest".to_string(), "zzz".to_string())],
        ..Default::default()
    };
    let page = ModelLoader::new(db)
        .load(entity::prelude::User::find(), &params)
        .await?;

    assert_eq!(page.total, 2);
    assert_eq!(page.records.len(), 2);

    Ok(())
}

/// Tests that multiple search clauses combine conjunctively.
///
/// Expected: Ok with only the records matching every clause.
#[tokio::test]
async fn combines_search_clauses() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::SystemRequirement)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::system_requirement::SystemRequirementFactory::new(db)
        .name("Basic Setup")
        .operational_system("Windows 10")
        .build()
        .await?;
    factory::system_requirement::SystemRequirementFactory::new(db)
        .name("Basic Deck")
        .operational_system("SteamOS")
        .build()
        .await?;

    let params = LoadingParams {
        search: vec![
            ("name".to_string(), "basic".to_string()),
            ("operational_system".to_string(), "windows".to_string()),
        ],
        ..Default::default()
    };
    let page = ModelLoader::new(db)
        .load(entity::prelude::SystemRequirement::find(), &params)
        .await?;

    assert_eq!(page.total, 1);
    assert_eq!(page.records[0].name, "Basic Setup");

    Ok(())
}

/// Tests that the total counts every match, not just the fetched page.
///
/// Expected: Ok with a page-sized record set and the pre-pagination total.
#[tokio::test]
async fn counts_matches_before_pagination() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::SystemRequirement)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for i in 1..=5 {
        factory::system_requirement::SystemRequirementFactory::new(db)
            .name(format!("Basic {}", i))
            .build()
            .await?;
    }
    factory::system_requirement::SystemRequirementFactory::new(db)
        .name("Advanced")
        .build()
        .await?;

    let params = LoadingParams {
        search: vec![("name".to_string(), "basic".to_string())],
        page: 1,
        length: 2,
        ..Default::default()
    };
    let page = ModelLoader::new(db)
        .load(entity::prelude::SystemRequirement::find(), &params)
        .await?;

    assert_eq!(page.records.len(), 2);
    assert_eq!(page.total, 5);
    assert_eq!(page.total_pages, 3);

    Ok(())
}
