use super::*;

/// Tests that only bot airlines are listed.
///
/// Expected: bots ordered by id with their financial figures
#[tokio::test]
async fn returns_only_bot_airlines() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_airline_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_airline(db).await?;
    let bot = AirlineFactory::new(db)
        .bot()
        .name("Robo Air")
        .balance(600_000_000)
        .reputation(40.0)
        .service_quality(55.0)
        .build()
        .await?;

    let repo = BotRepository::new(db);
    let bots = repo.get_all().await?;

    assert_eq!(bots.len(), 1);
    assert_eq!(bots[0].id, bot.id);
    assert_eq!(bots[0].name, "Robo Air");
    assert_eq!(bots[0].balance, 600_000_000);
    assert_eq!(bots[0].service_quality, 55.0);

    Ok(())
}

/// Tests listing bots when none exist.
///
/// Expected: empty list
#[tokio::test]
async fn returns_empty_without_bots() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_airline_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_airline(db).await?;

    let repo = BotRepository::new(db);

    assert!(repo.get_all().await?.is_empty());

    Ok(())
}
