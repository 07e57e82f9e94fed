use super::*;

/// Tests counting player and bot airlines.
///
/// Expected: one entry per airline type ordered by type
#[tokio::test]
async fn counts_airlines_per_type() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_airline_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_airline(db).await?;
    factory::create_airline(db).await?;
    factory::create_bot_airline(db).await?;

    let repo = AirlineRepository::new(db);
    let counts = repo.count_by_type().await?;

    assert_eq!(counts, vec![(0, 2), (2, 1)]);

    Ok(())
}
