use super::*;

/// Tests the schema size lookup on a backend without an information schema.
///
/// Expected: Ok(None) on SQLite
#[tokio::test]
async fn returns_none_outside_mysql() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = DatabaseRepository::new(db);

    assert_eq!(repo.schema_size_bytes().await?, None);

    Ok(())
}
