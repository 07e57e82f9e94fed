use super::*;

/// Tests grouping an airline's airplanes by model.
///
/// Expected: one entry per model with count and average condition
#[tokio::test]
async fn groups_airplanes_by_model() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_airline_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let bot = factory::create_bot_airline(db).await?;
    let other = factory::create_bot_airline(db).await?;
    let narrow = factory::create_airplane_model(db, "A320", 180).await?;
    let wide = factory::create_airplane_model(db, "B777", 396).await?;
    factory::create_airplane(db, bot.id, narrow.id, 80.0).await?;
    factory::create_airplane(db, bot.id, narrow.id, 90.0).await?;
    factory::create_airplane(db, bot.id, wide.id, 100.0).await?;
    factory::create_airplane(db, other.id, wide.id, 50.0).await?;

    let repo = BotRepository::new(db);
    let fleet = repo.get_fleet(bot.id).await?;

    assert_eq!(fleet.len(), 2);
    assert_eq!(fleet[0].model, "A320");
    assert_eq!(fleet[0].count, 2);
    assert_eq!(fleet[0].capacity, 180);
    assert_eq!(fleet[0].average_condition, 85.0);
    assert_eq!(fleet[1].model, "B777");
    assert_eq!(fleet[1].count, 1);

    Ok(())
}
