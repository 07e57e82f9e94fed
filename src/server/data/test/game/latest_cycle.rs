use super::*;

/// Tests finding the latest simulated cycle.
///
/// Expected: the highest recorded cycle
#[tokio::test]
async fn returns_highest_cycle() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_airline_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let airline = factory::create_airline(db).await?;
    let (_, _, link) = factory::helpers::create_route_for_airline(db, airline.id).await?;
    factory::create_link_consumption(db, &link, 41, 10, 100).await?;
    factory::create_link_consumption(db, &link, 42, 10, 100).await?;

    let repo = GameRepository::new(db);

    assert_eq!(repo.latest_cycle().await?, Some(42));

    Ok(())
}

/// Tests a game that has not simulated any cycle yet.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_without_consumption() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_airline_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GameRepository::new(db);

    assert_eq!(repo.latest_cycle().await?, None);

    Ok(())
}
