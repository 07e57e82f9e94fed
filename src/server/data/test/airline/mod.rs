use crate::server::data::airline::AirlineRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory, factory::airline::AirlineFactory};

mod count_by_type;
mod get_owned_by;
