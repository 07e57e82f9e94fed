use super::*;
use crate::server::data::user::{USER_IP_LIMIT, USER_UUID_LIMIT};
use test_utils::factory::user::{create_user_modifier, create_user_uuid};

/// Tests that IP history is capped and ordered by last sighting.
///
/// Expected: at most USER_IP_LIMIT rows, newest first
#[tokio::test]
async fn returns_most_recent_ips_up_to_limit() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let now = Utc::now().naive_utc();
    for i in 0..25 {
        factory::create_user_ip(db, user.id, &format!("10.0.0.{}", i), 1, now - Duration::hours(i))
            .await?;
    }

    let repo = UserRepository::new(db);
    let ips = repo.get_ips(user.id).await?;

    assert_eq!(ips.len() as u64, USER_IP_LIMIT);
    assert_eq!(ips[0].ip, "10.0.0.0");
    assert_eq!(ips[1].ip, "10.0.0.1");

    Ok(())
}

/// Tests that UUID history is capped at its own limit.
///
/// Expected: at most USER_UUID_LIMIT rows, newest first
#[tokio::test]
async fn returns_most_recent_uuids_up_to_limit() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let now = Utc::now().naive_utc();
    for i in 0..12 {
        create_user_uuid(db, user.id, &format!("uuid-{}", i), now - Duration::minutes(i)).await?;
    }

    let repo = UserRepository::new(db);
    let uuids = repo.get_uuids(user.id).await?;

    assert_eq!(uuids.len() as u64, USER_UUID_LIMIT);
    assert_eq!(uuids[0].uuid, "uuid-0");

    Ok(())
}

/// Tests that modifiers of other users are not returned.
///
/// Expected: only the requested user's modifiers, ordered by name
#[tokio::test]
async fn returns_only_own_modifiers() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    create_user_modifier(db, user.id, "WARNED", 10).await?;
    create_user_modifier(db, user.id, "CHAT_BANNED", 12).await?;
    create_user_modifier(db, other.id, "BANNED", 3).await?;

    let repo = UserRepository::new(db);
    let modifiers = repo.get_modifiers(user.id).await?;

    let names: Vec<_> = modifiers.iter().map(|m| m.modifier_name.as_str()).collect();
    assert_eq!(names, vec!["CHAT_BANNED", "WARNED"]);

    Ok(())
}
