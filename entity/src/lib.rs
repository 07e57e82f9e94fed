//! SeaORM entities describing the airline game's schema.
//!
//! The game server owns these tables; the admin dashboard only reads them. Table and
//! column names mirror the game's database so the same entities work against the live
//! MySQL store and against in-memory SQLite in tests.

pub mod prelude;

pub mod airline;
pub mod airline_base;
pub mod airline_info;
pub mod airplane;
pub mod airplane_model;
pub mod airport;
pub mod link;
pub mod link_consumption;
pub mod log;
pub mod user;
pub mod user_airline;
pub mod user_ip;
pub mod user_modifier;
pub mod user_uuid;
