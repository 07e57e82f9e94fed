use super::*;

/// Tests the activity and signup windows used by the stats endpoint.
///
/// Users inside the window are counted, users outside it or without a timestamp are not.
///
/// Expected: total 3, active 1, created 2
#[tokio::test]
async fn counts_users_inside_windows() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now().naive_utc();
    UserFactory::new(db)
        .last_active(Some(now - Duration::days(1)))
        .creation_time(Some(now - Duration::days(3)))
        .build()
        .await?;
    UserFactory::new(db)
        .last_active(Some(now - Duration::days(20)))
        .creation_time(Some(now - Duration::days(20)))
        .build()
        .await?;
    UserFactory::new(db)
        .last_active(None)
        .creation_time(Some(now - Duration::days(90)))
        .build()
        .await?;

    let repo = UserRepository::new(db);

    assert_eq!(repo.count().await?, 3);
    assert_eq!(
        repo.count_active_since(now - Duration::days(7)).await?,
        1
    );
    assert_eq!(
        repo.count_created_since(now - Duration::days(30)).await?,
        2
    );

    Ok(())
}

/// Tests grouping users by account status.
///
/// Expected: one entry per status, ordered by status name
#[tokio::test]
async fn groups_users_by_status() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    UserFactory::new(db).status("ACTIVE").build().await?;
    UserFactory::new(db).status("ACTIVE").build().await?;
    UserFactory::new(db).status("BANNED").build().await?;

    let repo = UserRepository::new(db);
    let breakdown = repo.count_by_status().await?;

    assert_eq!(
        breakdown,
        vec![("ACTIVE".to_string(), 2), ("BANNED".to_string(), 1)]
    );

    Ok(())
}

/// Tests counting against an empty user table.
///
/// Expected: zero everywhere and an empty breakdown
#[tokio::test]
async fn returns_zero_for_empty_table() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);

    assert_eq!(repo.count().await?, 0);
    assert!(repo.count_by_status().await?.is_empty());

    Ok(())
}
