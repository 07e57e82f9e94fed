use crate::server::{data::user::UserRepository, model::user::GetUsersParam};
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory, factory::user::UserFactory};

mod count;
mod count_active_by_date;
mod find_by_id;
mod get_ip_sightings;
mod get_ips;
mod get_paginated;
mod get_top_by_level;
