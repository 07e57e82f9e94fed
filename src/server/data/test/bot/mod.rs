use crate::server::data::bot::BotRepository;
use sea_orm::DbErr;
use test_utils::{
    builder::TestBuilder,
    factory,
    factory::{airline::AirlineFactory, link::LinkFactory},
};

mod count;
mod find_by_id;
mod get_all;
mod get_fleet;
mod get_fleets_for;
mod get_routes;
mod get_routes_for;
