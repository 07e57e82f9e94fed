use super::*;

/// Tests the game-wide link, airplane, base and airport counters.
///
/// Expected: counts matching the inserted rows
#[tokio::test]
async fn counts_game_objects() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_airline_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let airline = factory::create_airline(db).await?;
    let (from, _, _) = factory::helpers::create_route_for_airline(db, airline.id).await?;
    factory::airport::create_airport_with_size(db, 8).await?;
    let model = factory::create_airplane_model(db, "E190", 100).await?;
    factory::create_airplane(db, airline.id, model.id, 100.0).await?;
    factory::create_airline_base(db, airline.id, from.id).await?;

    let repo = GameRepository::new(db);

    assert_eq!(repo.count_links().await?, 1);
    assert_eq!(repo.count_airplanes().await?, 1);
    assert_eq!(repo.count_bases().await?, 1);
    assert_eq!(repo.count_airports_by_size().await?, vec![(5, 2), (8, 1)]);

    Ok(())
}
