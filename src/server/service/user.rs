//! User service for the reporting dashboard.
//!
//! This module provides the `UserService`, which assembles the front-page statistics,
//! the searchable user listing, per-user details and IP reverse lookups. Airline
//! ownership is resolved with a second query and joined in memory.

use std::collections::HashMap;

use chrono::{Duration, Utc};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{airline::AirlineRepository, user::UserRepository},
    error::AppError,
    model::user::{
        total_pages, GetUsersParam, IpLookup, IpUser, PaginatedUsers, User, UserDetails,
        UserStats, UserWithAirlines,
    },
};

/// Window, in days, for a user to count as active.
pub const ACTIVE_WINDOW_DAYS: i64 = 7;
/// Window, in days, for a user to count as new.
pub const NEW_USER_WINDOW_DAYS: i64 = 30;
/// Number of users in the top-by-level list.
pub const TOP_USERS: u64 = 10;

/// Service providing user reports.
pub struct UserService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new UserService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Builds the aggregate user statistics.
    ///
    /// # Returns
    /// - `Ok(UserStats)` - Totals, activity windows, status breakdown and top users
    /// - `Err(AppError::DbErr)` - Database error during any of the queries
    pub async fn get_stats(&self) -> Result<UserStats, AppError> {
        let user_repo = UserRepository::new(self.db);
        let now = Utc::now().naive_utc();

        let total_users = user_repo.count().await?;
        let active_users = user_repo
            .count_active_since(now - Duration::days(ACTIVE_WINDOW_DAYS))
            .await?;
        let new_users = user_repo
            .count_created_since(now - Duration::days(NEW_USER_WINDOW_DAYS))
            .await?;
        let status_breakdown = user_repo.count_by_status().await?;
        let top_users = user_repo.get_top_by_level(TOP_USERS).await?;

        Ok(UserStats {
            total_users,
            active_users,
            new_users,
            status_breakdown,
            top_users,
        })
    }

    /// Retrieves one page of users with the airlines they own.
    ///
    /// # Arguments
    /// - `param` - Normalized page, page size and optional search term
    ///
    /// # Returns
    /// - `Ok(PaginatedUsers)` - Users for the requested page with pagination metadata
    /// - `Err(AppError::DbErr)` - Database error during the page or airline query
    pub async fn get_paginated(&self, param: GetUsersParam) -> Result<PaginatedUsers, AppError> {
        let user_repo = UserRepository::new(self.db);

        let (users, total) = user_repo.get_paginated(&param).await?;
        let users = self.attach_airlines(users).await?;

        Ok(PaginatedUsers {
            users,
            total,
            page: param.page,
            per_page: param.per_page,
            total_pages: total_pages(total, param.per_page),
        })
    }

    /// Retrieves a user's profile together with IPs, modifiers and client UUIDs.
    ///
    /// # Arguments
    /// - `user_id` - Id of the user to inspect
    ///
    /// # Returns
    /// - `Ok(UserDetails)` - Profile and tracking records
    /// - `Err(AppError::NotFound)` - No user with that id
    /// - `Err(AppError::DbErr)` - Database error during any of the queries
    pub async fn get_details(&self, user_id: i32) -> Result<UserDetails, AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some(user) = user_repo.find_by_id(user_id).await? else {
            return Err(AppError::NotFound("User not found".to_string()));
        };

        let user = self
            .attach_airlines(vec![user])
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        let ips = user_repo.get_ips(user_id).await?;
        let modifiers = user_repo.get_modifiers(user_id).await?;
        let uuids = user_repo.get_uuids(user_id).await?;

        Ok(UserDetails {
            user,
            ips,
            modifiers,
            uuids,
        })
    }

    /// Finds every user seen from an IP address, most recently seen first.
    ///
    /// Sightings whose user row no longer exists are skipped.
    ///
    /// # Arguments
    /// - `ip` - IP address to look up, matched exactly
    ///
    /// # Returns
    /// - `Ok(IpLookup)` - Users with occurrence counts and airlines, possibly empty
    /// - `Err(AppError::DbErr)` - Database error during any of the queries
    pub async fn get_by_ip(&self, ip: String) -> Result<IpLookup, AppError> {
        let user_repo = UserRepository::new(self.db);

        let sightings = user_repo.get_ip_sightings(&ip).await?;
        let user_ids: Vec<i32> = sightings.iter().map(|s| s.user_id).collect();
        let mut users: HashMap<i32, User> = user_repo
            .get_by_ids(&user_ids)
            .await?
            .into_iter()
            .map(|u| (u.id, u))
            .collect();

        let names: Vec<String> = users.values().map(|u| u.user_name.clone()).collect();
        let mut owned = AirlineRepository::new(self.db).get_owned_by(&names).await?;

        let users = sightings
            .into_iter()
            .filter_map(|sighting| {
                let user = users.remove(&sighting.user_id)?;
                let airlines = owned.remove(&user.user_name).unwrap_or_default();

                Some(IpUser {
                    user,
                    occurrence: sighting.occurrence,
                    last_update: sighting.last_update,
                    airlines,
                })
            })
            .collect();

        Ok(IpLookup { ip, users })
    }

    async fn attach_airlines(&self, users: Vec<User>) -> Result<Vec<UserWithAirlines>, AppError> {
        let names: Vec<String> = users.iter().map(|u| u.user_name.clone()).collect();
        let mut owned = AirlineRepository::new(self.db).get_owned_by(&names).await?;

        Ok(users
            .into_iter()
            .map(|user| {
                let airlines = owned.remove(&user.user_name).unwrap_or_default();
                UserWithAirlines { user, airlines }
            })
            .collect())
    }
}
