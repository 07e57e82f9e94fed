use super::*;

/// Tests finding a bot airline by id.
///
/// Expected: Ok(Some(Bot))
#[tokio::test]
async fn finds_bot() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_airline_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let bot = factory::create_bot_airline(db).await?;

    let repo = BotRepository::new(db);
    let found = repo.find_by_id(bot.id).await?;

    assert_eq!(found.map(|b| b.id), Some(bot.id));

    Ok(())
}

/// Tests that a player airline is not treated as a bot.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_player_airline() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_airline_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let player = factory::create_airline(db).await?;

    let repo = BotRepository::new(db);

    assert!(repo.find_by_id(player.id).await?.is_none());
    assert!(repo.find_by_id(player.id + 1000).await?.is_none());

    Ok(())
}
