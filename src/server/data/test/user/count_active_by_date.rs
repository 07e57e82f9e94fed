use super::*;

/// Tests that users are bucketed by the date of their last activity.
///
/// Expected: two buckets newest first, with the two users of the same day counted together
#[tokio::test]
async fn buckets_users_per_date() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now().naive_utc();
    let yesterday = now - Duration::days(1);
    let two_days_ago = now - Duration::days(2);
    UserFactory::new(db).last_active(Some(yesterday)).build().await?;
    UserFactory::new(db).last_active(Some(yesterday)).build().await?;
    UserFactory::new(db)
        .last_active(Some(two_days_ago))
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let activity = repo.count_active_by_date(now - Duration::days(7)).await?;

    assert_eq!(activity.len(), 2);
    assert_eq!(activity[0].date, yesterday.date());
    assert_eq!(activity[0].active_users, 2);
    assert_eq!(activity[1].date, two_days_ago.date());
    assert_eq!(activity[1].active_users, 1);

    Ok(())
}

/// Tests that users outside the window or never active are left out.
///
/// Expected: only the recent user is counted
#[tokio::test]
async fn ignores_users_outside_window() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now().naive_utc();
    UserFactory::new(db)
        .last_active(Some(now - Duration::days(1)))
        .build()
        .await?;
    UserFactory::new(db)
        .last_active(Some(now - Duration::days(30)))
        .build()
        .await?;
    UserFactory::new(db).last_active(None).build().await?;

    let repo = UserRepository::new(db);
    let activity = repo.count_active_by_date(now - Duration::days(7)).await?;

    let total: u64 = activity.iter().map(|a| a.active_users).sum();
    assert_eq!(total, 1);
    assert!(activity
        .iter()
        .all(|a| a.date >= (now - Duration::days(7)).date()));

    Ok(())
}
