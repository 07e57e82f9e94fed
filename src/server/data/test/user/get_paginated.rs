use super::*;

/// Tests that users are ordered by most recent activity.
///
/// Expected: newest activity first, total counts every user
#[tokio::test]
async fn orders_by_last_active_descending() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now().naive_utc();
    UserFactory::new(db)
        .user_name("older")
        .last_active(Some(now - Duration::days(5)))
        .build()
        .await?;
    UserFactory::new(db)
        .user_name("newest")
        .last_active(Some(now))
        .build()
        .await?;
    UserFactory::new(db)
        .user_name("middle")
        .last_active(Some(now - Duration::days(1)))
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let (users, total) = repo
        .get_paginated(&GetUsersParam::new(None, None, None))
        .await?;

    assert_eq!(total, 3);
    let names: Vec<_> = users.iter().map(|u| u.user_name.as_str()).collect();
    assert_eq!(names, vec!["newest", "middle", "older"]);

    Ok(())
}

/// Tests that pages beyond the first skip earlier rows.
///
/// Expected: second page of size 2 holds the fifth user only, total stays 5
#[tokio::test]
async fn returns_requested_page() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now().naive_utc();
    for i in 0..5 {
        UserFactory::new(db)
            .user_name(format!("pilot_{}", i))
            .last_active(Some(now - Duration::hours(i)))
            .build()
            .await?;
    }

    let repo = UserRepository::new(db);
    let (users, total) = repo
        .get_paginated(&GetUsersParam::new(Some(3), Some(2), None))
        .await?;

    assert_eq!(total, 5);
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].user_name, "pilot_4");

    Ok(())
}

/// Tests substring search over user name and email.
///
/// Expected: matches on either column, total reflects only matches
#[tokio::test]
async fn filters_by_name_or_email() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    UserFactory::new(db)
        .user_name("skyking")
        .email("king@example.com")
        .build()
        .await?;
    UserFactory::new(db)
        .user_name("pilot")
        .email("sky@example.com")
        .build()
        .await?;
    UserFactory::new(db)
        .user_name("ground")
        .email("ground@example.com")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let (users, total) = repo
        .get_paginated(&GetUsersParam::new(None, None, Some("sky".to_string())))
        .await?;

    assert_eq!(total, 2);
    assert!(users.iter().all(|u| u.user_name != "ground"));

    Ok(())
}

/// Tests a search that matches nothing.
///
/// Expected: empty page and zero total
#[tokio::test]
async fn returns_empty_page_without_matches() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    let (users, total) = repo
        .get_paginated(&GetUsersParam::new(None, None, Some("nobody".to_string())))
        .await?;

    assert!(users.is_empty());
    assert_eq!(total, 0);

    Ok(())
}
