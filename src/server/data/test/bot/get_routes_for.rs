use super::*;

/// Tests that each airline's routes use that airline's own latest cycle.
///
/// Expected: first bot reads cycle 5, second bot reads cycle 3, airline without links absent
#[tokio::test]
async fn uses_latest_cycle_per_airline() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_airline_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_bot_airline(db).await?;
    let second = factory::create_bot_airline(db).await?;
    let idle = factory::create_bot_airline(db).await?;
    let (_, _, first_link) = factory::helpers::create_route_for_airline(db, first.id).await?;
    let (_, _, second_link) = factory::helpers::create_route_for_airline(db, second.id).await?;
    factory::create_link_consumption(db, &first_link, 4, 10, 100).await?;
    factory::create_link_consumption(db, &first_link, 5, 20, 100).await?;
    factory::create_link_consumption(db, &second_link, 3, 30, 100).await?;

    let repo = BotRepository::new(db);
    let routes = repo
        .get_routes_for(&[first.id, second.id, idle.id])
        .await?;

    assert_eq!(routes.len(), 2);
    assert_eq!(routes[&first.id].len(), 1);
    assert_eq!(routes[&first.id][0].cycle, Some(5));
    assert_eq!(routes[&first.id][0].sold_seats, 20);
    assert_eq!(routes[&second.id][0].cycle, Some(3));
    assert_eq!(routes[&second.id][0].sold_seats, 30);
    assert!(!routes.contains_key(&idle.id));

    Ok(())
}

/// Tests an empty id list.
///
/// Expected: empty map
#[tokio::test]
async fn returns_empty_for_no_airlines() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_airline_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BotRepository::new(db);

    assert!(repo.get_routes_for(&[]).await?.is_empty());

    Ok(())
}
