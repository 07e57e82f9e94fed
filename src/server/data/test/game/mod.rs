use crate::server::data::game::GameRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod count;
mod get_cycle_totals;
mod latest_cycle;
