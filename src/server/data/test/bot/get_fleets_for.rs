use super::*;

/// Tests that airplanes are grouped per owner before grouping by model.
///
/// Expected: separate compositions for both bots, fleetless bot absent
#[tokio::test]
async fn groups_fleets_per_owner() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_airline_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_bot_airline(db).await?;
    let second = factory::create_bot_airline(db).await?;
    let grounded = factory::create_bot_airline(db).await?;
    let narrow = factory::create_airplane_model(db, "A320", 180).await?;
    let wide = factory::create_airplane_model(db, "B777", 396).await?;
    factory::create_airplane(db, first.id, narrow.id, 80.0).await?;
    factory::create_airplane(db, first.id, wide.id, 90.0).await?;
    factory::create_airplane(db, second.id, wide.id, 50.0).await?;
    factory::create_airplane(db, second.id, wide.id, 70.0).await?;

    let repo = BotRepository::new(db);
    let fleets = repo
        .get_fleets_for(&[first.id, second.id, grounded.id])
        .await?;

    assert_eq!(fleets.len(), 2);
    assert_eq!(fleets[&first.id].len(), 2);
    assert_eq!(fleets[&second.id].len(), 1);
    assert_eq!(fleets[&second.id][0].model, "B777");
    assert_eq!(fleets[&second.id][0].count, 2);
    assert_eq!(fleets[&second.id][0].average_condition, 60.0);
    assert!(!fleets.contains_key(&grounded.id));

    Ok(())
}
