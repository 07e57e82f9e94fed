use super::*;

/// Tests that routes carry seat figures from the latest cycle.
///
/// Expected: sold seats of cycle 2, load factor 75%
#[tokio::test]
async fn uses_latest_consumption_cycle() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_airline_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let bot = factory::create_bot_airline(db).await?;
    let (from, to, link) = factory::helpers::create_route_for_airline(db, bot.id).await?;
    factory::create_link_consumption(db, &link, 1, 100, 400).await?;
    factory::create_link_consumption(db, &link, 2, 300, 400).await?;

    let repo = BotRepository::new(db);
    let routes = repo.get_routes(bot.id).await?;

    assert_eq!(routes.len(), 1);
    let route = &routes[0];
    assert_eq!(route.from_airport.iata, from.iata);
    assert_eq!(route.to_airport.iata, to.iata);
    assert_eq!(route.sold_seats, 300);
    assert_eq!(route.cycle, Some(2));
    assert_eq!(route.load_factor(), 75.0);

    Ok(())
}

/// Tests a route that was never flown and has no capacity.
///
/// Expected: zero sold seats, no cycle and a 0% load factor
#[tokio::test]
async fn reports_zero_load_factor_for_zero_capacity() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_airline_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let bot = factory::create_bot_airline(db).await?;
    let from = factory::create_airport(db).await?;
    let to = factory::create_airport(db).await?;
    LinkFactory::new(db, bot.id, from.id, to.id)
        .capacity(0)
        .build()
        .await?;

    let repo = BotRepository::new(db);
    let routes = repo.get_routes(bot.id).await?;

    assert_eq!(routes.len(), 1);
    assert_eq!(routes[0].sold_seats, 0);
    assert_eq!(routes[0].cycle, None);
    assert_eq!(routes[0].load_factor(), 0.0);

    Ok(())
}

/// Tests an airline without links.
///
/// Expected: empty route list
#[tokio::test]
async fn returns_empty_without_links() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_airline_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let bot = factory::create_bot_airline(db).await?;

    let repo = BotRepository::new(db);

    assert!(repo.get_routes(bot.id).await?.is_empty());

    Ok(())
}
