use super::*;

/// Tests finding every user seen from an IP address.
///
/// Expected: sightings for the address only, most recent first
#[tokio::test]
async fn returns_sightings_for_address() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_user(db).await?;
    let second = factory::create_user(db).await?;
    let now = Utc::now().naive_utc();
    factory::create_user_ip(db, first.id, "192.168.1.5", 3, now - Duration::days(2)).await?;
    factory::create_user_ip(db, second.id, "192.168.1.5", 7, now).await?;
    factory::create_user_ip(db, second.id, "192.168.1.6", 1, now).await?;

    let repo = UserRepository::new(db);
    let sightings = repo.get_ip_sightings("192.168.1.5").await?;

    assert_eq!(sightings.len(), 2);
    assert_eq!(sightings[0].user_id, second.id);
    assert_eq!(sightings[0].occurrence, 7);
    assert_eq!(sightings[1].user_id, first.id);

    Ok(())
}

/// Tests an address nobody used.
///
/// Expected: empty result
#[tokio::test]
async fn returns_empty_for_unknown_address() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);

    assert!(repo.get_ip_sightings("127.0.0.1").await?.is_empty());

    Ok(())
}
