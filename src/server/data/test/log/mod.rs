use crate::server::{data::log::LogRepository, util::schema::is_missing_table};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod get_recent;
