use super::*;

/// Tests finding an existing user by id.
///
/// Expected: Ok(Some(User)) with matching fields
#[tokio::test]
async fn finds_existing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = UserFactory::new(db)
        .user_name("captain")
        .admin_status("ADMIN")
        .level(9)
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let user = repo.find_by_id(created.id).await?.unwrap();

    assert_eq!(user.user_name, "captain");
    assert_eq!(user.admin_status.as_deref(), Some("ADMIN"));
    assert_eq!(user.level, 9);

    Ok(())
}

/// Tests looking up an id that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);

    assert!(repo.find_by_id(999_999).await?.is_none());

    Ok(())
}
