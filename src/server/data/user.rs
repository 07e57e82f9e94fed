//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for reading user records and the tracking
//! tables hanging off them (IPs, client UUIDs, modifiers). Entity rows are converted to
//! domain models at this boundary.

use chrono::{NaiveDate, NaiveDateTime};
use sea_orm::{
    sea_query::{Expr, Func},
    ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect,
};

use crate::server::model::{
    activity::DailyActivity,
    user::{GetUsersParam, User, UserIp, UserModifier, UserUuid},
};

/// Number of IP addresses returned with a user's details.
pub const USER_IP_LIMIT: u64 = 20;
/// Number of client UUIDs returned with a user's details.
pub const USER_UUID_LIMIT: u64 = 10;

/// Repository providing read access to users and their tracking records.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Counts every user.
    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::User::find().count(self.db).await
    }

    /// Counts users whose last activity is at or after `since`.
    pub async fn count_active_since(&self, since: NaiveDateTime) -> Result<u64, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::LastActive.gte(since))
            .count(self.db)
            .await
    }

    /// Counts users created at or after `since`.
    pub async fn count_created_since(&self, since: NaiveDateTime) -> Result<u64, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::CreationTime.gte(since))
            .count(self.db)
            .await
    }

    /// Counts users per account status.
    ///
    /// # Returns
    /// - `Ok(Vec<(String, i64)>)` - `(status, count)` pairs ordered by status
    /// - `Err(DbErr)` - Database error during the grouped query
    pub async fn count_by_status(&self) -> Result<Vec<(String, i64)>, DbErr> {
        entity::prelude::User::find()
            .select_only()
            .column(entity::user::Column::Status)
            .column_as(entity::user::Column::Id.count(), "count")
            .group_by(entity::user::Column::Status)
            .order_by_asc(entity::user::Column::Status)
            .into_tuple::<(String, i64)>()
            .all(self.db)
            .await
    }

    /// Gets the highest level users.
    ///
    /// # Arguments
    /// - `limit` - Maximum number of users to return
    ///
    /// # Returns
    /// - `Ok(Vec<User>)` - Users ordered by level descending, ties broken by id
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_top_by_level(&self, limit: u64) -> Result<Vec<User>, DbErr> {
        let entities = entity::prelude::User::find()
            .order_by_desc(entity::user::Column::Level)
            .order_by_asc(entity::user::Column::Id)
            .limit(limit)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(User::from_entity).collect())
    }

    /// Gets one page of users, optionally filtered by a search term.
    ///
    /// The search term is matched as a substring against both user name and email.
    /// Users are ordered by most recent activity, newest first.
    ///
    /// # Arguments
    /// - `param` - Page, page size and optional search term
    ///
    /// # Returns
    /// - `Ok((Vec<User>, u64))` - Users on the page and the total number of matching users
    /// - `Err(DbErr)` - Database error during count or page query
    pub async fn get_paginated(&self, param: &GetUsersParam) -> Result<(Vec<User>, u64), DbErr> {
        let mut query = entity::prelude::User::find();
        if let Some(term) = &param.search {
            query = query.filter(
                Condition::any()
                    .add(entity::user::Column::UserName.contains(term.as_str()))
                    .add(entity::user::Column::Email.contains(term.as_str())),
            );
        }

        let total = query.clone().count(self.db).await?;

        let entities = query
            .order_by_desc(entity::user::Column::LastActive)
            .order_by_asc(entity::user::Column::Id)
            .limit(param.per_page)
            .offset(param.offset())
            .all(self.db)
            .await?;

        Ok((entities.into_iter().map(User::from_entity).collect(), total))
    }

    /// Finds a user by id.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, user_id: i32) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find_by_id(user_id)
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    /// Finds users by id, in no particular order.
    pub async fn get_by_ids(&self, user_ids: &[i32]) -> Result<Vec<User>, DbErr> {
        if user_ids.is_empty() {
            return Ok(Vec::new());
        }

        let entities = entity::prelude::User::find()
            .filter(entity::user::Column::Id.is_in(user_ids.iter().copied()))
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(User::from_entity).collect())
    }

    /// Gets the most recently seen IP addresses of a user.
    pub async fn get_ips(&self, user_id: i32) -> Result<Vec<UserIp>, DbErr> {
        let entities = entity::prelude::UserIp::find()
            .filter(entity::user_ip::Column::User.eq(user_id))
            .order_by_desc(entity::user_ip::Column::LastUpdate)
            .limit(USER_IP_LIMIT)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(UserIp::from_entity).collect())
    }

    /// Gets every modifier applied to a user.
    pub async fn get_modifiers(&self, user_id: i32) -> Result<Vec<UserModifier>, DbErr> {
        let entities = entity::prelude::UserModifier::find()
            .filter(entity::user_modifier::Column::User.eq(user_id))
            .order_by_asc(entity::user_modifier::Column::ModifierName)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(UserModifier::from_entity).collect())
    }

    /// Gets the most recently seen client UUIDs of a user.
    pub async fn get_uuids(&self, user_id: i32) -> Result<Vec<UserUuid>, DbErr> {
        let entities = entity::prelude::UserUuid::find()
            .filter(entity::user_uuid::Column::User.eq(user_id))
            .order_by_desc(entity::user_uuid::Column::LastUpdate)
            .limit(USER_UUID_LIMIT)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(UserUuid::from_entity).collect())
    }

    /// Gets every sighting of an IP address, most recent first.
    pub async fn get_ip_sightings(&self, ip: &str) -> Result<Vec<UserIp>, DbErr> {
        let entities = entity::prelude::UserIp::find()
            .filter(entity::user_ip::Column::Ip.eq(ip))
            .order_by_desc(entity::user_ip::Column::LastUpdate)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(UserIp::from_entity).collect())
    }

    /// Counts users per calendar date of their last activity, for activity at or after
    /// `since`.
    ///
    /// Each user has a single `last_active`, so the per-date count is a distinct user count.
    ///
    /// # Arguments
    /// - `since` - Start of the activity window
    ///
    /// # Returns
    /// - `Ok(Vec<DailyActivity>)` - One bucket per date with activity, newest date first
    /// - `Err(DbErr)` - Database error during the grouped query
    pub async fn count_active_by_date(
        &self,
        since: NaiveDateTime,
    ) -> Result<Vec<DailyActivity>, DbErr> {
        let date: Expr = Func::cust("DATE").arg(Expr::col((
            entity::prelude::User,
            entity::user::Column::LastActive,
        ))).into();

        let buckets = entity::prelude::User::find()
            .select_only()
            .column_as(date.clone(), "date")
            .column_as(entity::user::Column::Id.count(), "active_users")
            .filter(entity::user::Column::LastActive.gte(since))
            .group_by(date.clone())
            .order_by_desc(date)
            .into_tuple::<(NaiveDate, i64)>()
            .all(self.db)
            .await?;

        Ok(buckets
            .into_iter()
            .map(|(date, active_users)| DailyActivity {
                date,
                active_users: active_users as u64,
            })
            .collect())
    }
}
