use crate::server::data::database::DatabaseRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod count_tables;
mod schema_size_bytes;
