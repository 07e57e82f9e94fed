use super::*;

/// Tests resolving the airlines owned by users.
///
/// Expected: airlines grouped per user name in id order, users without airlines absent
#[tokio::test]
async fn groups_airlines_by_owner() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_user_tables()
        .with_airline_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = AirlineFactory::new(db).name("Alpha Air").build().await?;
    let second = AirlineFactory::new(db).name("Beta Jet").build().await?;
    factory::create_user_airline(db, "owner", first.id).await?;
    factory::create_user_airline(db, "owner", second.id).await?;

    let repo = AirlineRepository::new(db);
    let owned = repo
        .get_owned_by(&["owner".to_string(), "nobody".to_string()])
        .await?;

    let airlines = owned.get("owner").unwrap();
    let names: Vec<_> = airlines.iter().map(|a| a.name.as_str()).collect();
    assert_eq!(names, vec!["Alpha Air", "Beta Jet"]);
    assert!(!owned.contains_key("nobody"));

    Ok(())
}

/// Tests ownership rows pointing at a deleted airline.
///
/// Expected: the dangling row is skipped
#[tokio::test]
async fn skips_missing_airlines() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_user_tables()
        .with_airline_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_user_airline(db, "ghost", 424242).await?;

    let repo = AirlineRepository::new(db);
    let owned = repo.get_owned_by(&["ghost".to_string()]).await?;

    assert!(owned.is_empty());

    Ok(())
}
