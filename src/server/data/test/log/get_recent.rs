use super::*;

/// Tests that the newest log rows come first and the limit is applied.
///
/// Expected: two rows from the latest cycles
#[tokio::test]
async fn returns_newest_rows_up_to_limit() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let airline = factory::create_airline(db).await?;
    factory::create_log(db, airline.id, "opened route", 1).await?;
    factory::create_log(db, airline.id, "bought airplane", 3).await?;
    factory::create_log(db, airline.id, "built base", 2).await?;

    let repo = LogRepository::new(db);
    let logs = repo.get_recent(2).await?;

    let messages: Vec<_> = logs.iter().map(|l| l.message.as_str()).collect();
    assert_eq!(messages, vec!["bought airplane", "built base"]);

    Ok(())
}

/// Tests a deployment without a log table.
///
/// Expected: an error recognized as a missing table
#[tokio::test]
async fn fails_with_missing_table_error() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_airline_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = LogRepository::new(db);
    let result = repo.get_recent(10).await;

    assert!(result.is_err());
    assert!(is_missing_table(&result.unwrap_err()));

    Ok(())
}
