use super::*;

/// Tests that consumption is summed across links within each cycle.
///
/// Expected: one total per cycle, newest first, with both links included
#[tokio::test]
async fn sums_links_per_cycle() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_airline_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let airline = factory::create_airline(db).await?;
    let (_, _, first) = factory::helpers::create_route_for_airline(db, airline.id).await?;
    let (_, _, second) = factory::helpers::create_route_for_airline(db, airline.id).await?;
    factory::create_link_consumption(db, &first, 41, 100, 200).await?;
    factory::create_link_consumption(db, &second, 41, 50, 200).await?;
    factory::create_link_consumption(db, &first, 42, 180, 200).await?;

    let repo = GameRepository::new(db);
    let totals = repo.get_cycle_totals(41).await?;

    assert_eq!(totals.len(), 2);
    assert_eq!(totals[0].cycle, 42);
    assert_eq!(totals[0].passengers, 180);
    assert_eq!(totals[1].cycle, 41);
    assert_eq!(totals[1].passengers, 150);
    assert_eq!(totals[1].capacity, 400);
    assert_eq!(totals[1].revenue, 15_000);

    Ok(())
}

/// Tests that older cycles are excluded.
///
/// Expected: totals for cycles 10 and 9 only
#[tokio::test]
async fn excludes_older_cycles() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_airline_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let airline = factory::create_airline(db).await?;
    let (_, _, link) = factory::helpers::create_route_for_airline(db, airline.id).await?;
    for cycle in 1..=10 {
        factory::create_link_consumption(db, &link, cycle, 50, 100).await?;
    }

    let repo = GameRepository::new(db);
    let totals = repo.get_cycle_totals(9).await?;

    let cycles: Vec<_> = totals.iter().map(|t| t.cycle).collect();
    assert_eq!(cycles, vec![10, 9]);

    Ok(())
}
