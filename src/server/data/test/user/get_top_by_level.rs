use super::*;

/// Tests retrieving the highest level users.
///
/// Expected: users ordered by level descending, truncated to the limit
#[tokio::test]
async fn returns_highest_levels_first() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    UserFactory::new(db).user_name("low").level(2).build().await?;
    UserFactory::new(db).user_name("high").level(40).build().await?;
    UserFactory::new(db).user_name("mid").level(15).build().await?;

    let repo = UserRepository::new(db);
    let top = repo.get_top_by_level(2).await?;

    assert_eq!(top.len(), 2);
    assert_eq!(top[0].user_name, "high");
    assert_eq!(top[1].user_name, "mid");

    Ok(())
}
