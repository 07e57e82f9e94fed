//! User factory for creating test user rows and their tracking records.

use crate::factory::helpers::next_id;
use chrono::{NaiveDateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test users with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let user = UserFactory::new(&db)
///     .user_name("pilot")
///     .level(12)
///     .last_active(None)
///     .build()
///     .await?;
/// ```
pub struct UserFactory<'a> {
    db: &'a DatabaseConnection,
    user_name: String,
    email: String,
    status: String,
    admin_status: Option<String>,
    level: i32,
    creation_time: Option<NaiveDateTime>,
    last_active: Option<NaiveDateTime>,
}

impl<'a> UserFactory<'a> {
    /// Creates a new UserFactory with default values.
    ///
    /// Defaults:
    /// - user_name: `"user_{id}"`, email: `"user_{id}@example.com"`
    /// - status: `"ACTIVE"`, level: `1`, no admin status
    /// - creation_time and last_active: now
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        let now = Utc::now().naive_utc();
        Self {
            db,
            user_name: format!("user_{}", id),
            email: format!("user_{}@example.com", id),
            status: "ACTIVE".to_string(),
            admin_status: None,
            level: 1,
            creation_time: Some(now),
            last_active: Some(now),
        }
    }

    pub fn user_name(mut self, user_name: impl Into<String>) -> Self {
        self.user_name = user_name.into();
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub fn admin_status(mut self, admin_status: impl Into<String>) -> Self {
        self.admin_status = Some(admin_status.into());
        self
    }

    pub fn level(mut self, level: i32) -> Self {
        self.level = level;
        self
    }

    pub fn creation_time(mut self, creation_time: Option<NaiveDateTime>) -> Self {
        self.creation_time = creation_time;
        self
    }

    pub fn last_active(mut self, last_active: Option<NaiveDateTime>) -> Self {
        self.last_active = last_active;
        self
    }

    /// Builds and inserts the user row into the database.
    ///
    /// # Returns
    /// - `Ok(entity::user::Model)` - Created user row
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::user::Model, DbErr> {
        entity::user::ActiveModel {
            user_name: ActiveValue::Set(self.user_name),
            email: ActiveValue::Set(self.email),
            status: ActiveValue::Set(self.status),
            admin_status: ActiveValue::Set(self.admin_status),
            level: ActiveValue::Set(self.level),
            creation_time: ActiveValue::Set(self.creation_time),
            last_active: ActiveValue::Set(self.last_active),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a user with default values.
pub async fn create_user(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).build().await
}

/// Associates a user with an airline through `user_airline`.
pub async fn create_user_airline(
    db: &DatabaseConnection,
    user_name: &str,
    airline_id: i32,
) -> Result<entity::user_airline::Model, DbErr> {
    entity::user_airline::ActiveModel {
        user_name: ActiveValue::Set(user_name.to_string()),
        airline: ActiveValue::Set(airline_id),
    }
    .insert(db)
    .await
}

/// Records an IP address sighting for a user.
///
/// # Arguments
/// - `db` - Database connection
/// - `user_id` - Id of the user the IP belongs to
/// - `ip` - IP address string
/// - `occurrence` - Number of times the IP was seen
/// - `last_update` - When the IP was last seen
pub async fn create_user_ip(
    db: &DatabaseConnection,
    user_id: i32,
    ip: &str,
    occurrence: i32,
    last_update: NaiveDateTime,
) -> Result<entity::user_ip::Model, DbErr> {
    entity::user_ip::ActiveModel {
        user: ActiveValue::Set(user_id),
        ip: ActiveValue::Set(ip.to_string()),
        occurrence: ActiveValue::Set(occurrence),
        last_update: ActiveValue::Set(Some(last_update)),
    }
    .insert(db)
    .await
}

/// Records a client UUID sighting for a user.
pub async fn create_user_uuid(
    db: &DatabaseConnection,
    user_id: i32,
    uuid: &str,
    last_update: NaiveDateTime,
) -> Result<entity::user_uuid::Model, DbErr> {
    entity::user_uuid::ActiveModel {
        user: ActiveValue::Set(user_id),
        uuid: ActiveValue::Set(uuid.to_string()),
        occurrence: ActiveValue::Set(1),
        last_update: ActiveValue::Set(Some(last_update)),
    }
    .insert(db)
    .await
}

/// Applies a named modifier to a user.
pub async fn create_user_modifier(
    db: &DatabaseConnection,
    user_id: i32,
    modifier_name: &str,
    creation: i32,
) -> Result<entity::user_modifier::Model, DbErr> {
    entity::user_modifier::ActiveModel {
        user: ActiveValue::Set(user_id),
        modifier_name: ActiveValue::Set(modifier_name.to_string()),
        creation: ActiveValue::Set(creation),
    }
    .insert(db)
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TestBuilder;

    #[tokio::test]
    async fn creates_user_with_defaults() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_user_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let user = create_user(db).await?;

        assert!(user.id > 0);
        assert!(user.user_name.starts_with("user_"));
        assert_eq!(user.status, "ACTIVE");
        assert!(user.last_active.is_some());

        Ok(())
    }

    #[tokio::test]
    async fn creates_multiple_unique_users() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_user_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let user1 = create_user(db).await?;
        let user2 = create_user(db).await?;

        assert_ne!(user1.id, user2.id);
        assert_ne!(user1.user_name, user2.user_name);

        Ok(())
    }
}
