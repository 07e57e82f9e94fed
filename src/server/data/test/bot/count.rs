use super::*;

/// Tests per-airline route, aircraft and base counts.
///
/// Expected: counts keyed by airline id, airlines without rows absent
#[tokio::test]
async fn counts_per_airline() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_airline_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let busy = factory::create_bot_airline(db).await?;
    let idle = factory::create_bot_airline(db).await?;

    let (from, to, _) = factory::helpers::create_route_for_airline(db, busy.id).await?;
    factory::create_link(db, busy.id, to.id, from.id).await?;
    let model = factory::create_airplane_model(db, "A320", 180).await?;
    factory::create_airplane(db, busy.id, model.id, 90.0).await?;
    factory::create_airline_base(db, busy.id, from.id).await?;

    let repo = BotRepository::new(db);
    let ids = [busy.id, idle.id];
    let routes = repo.count_routes(&ids).await?;
    let aircraft = repo.count_aircraft(&ids).await?;
    let bases = repo.count_bases(&ids).await?;

    assert_eq!(routes.get(&busy.id), Some(&2));
    assert_eq!(aircraft.get(&busy.id), Some(&1));
    assert_eq!(bases.get(&busy.id), Some(&1));
    assert!(!routes.contains_key(&idle.id));

    Ok(())
}
