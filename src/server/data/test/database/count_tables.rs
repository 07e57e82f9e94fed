use super::*;

/// Tests row counts across every known table.
///
/// Expected: counts for present tables in a fixed order
#[tokio::test]
async fn counts_rows_per_table() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_user(db).await?;
    factory::create_user(db).await?;
    factory::create_airline(db).await?;

    let repo = DatabaseRepository::new(db);
    let tables = repo.count_tables().await?;

    assert_eq!(tables[0], ("user".to_string(), Some(2)));
    assert!(tables.contains(&("airline".to_string(), Some(1))));
    assert!(tables.contains(&("airline_info".to_string(), Some(1))));
    assert!(tables.contains(&("log".to_string(), Some(0))));

    Ok(())
}

/// Tests a deployment where some tables are absent.
///
/// Expected: absent tables report `None` instead of failing the whole query
#[tokio::test]
async fn reports_missing_tables_as_none() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_user(db).await?;

    let repo = DatabaseRepository::new(db);
    let tables = repo.count_tables().await?;

    assert_eq!(tables.len(), 14);
    assert!(tables.contains(&("user".to_string(), Some(1))));
    assert!(tables.contains(&("log".to_string(), None)));
    assert!(tables.contains(&("airline".to_string(), None)));

    Ok(())
}
