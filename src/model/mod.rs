//! JSON data transfer objects returned by the dashboard API.
//!
//! Field names are part of the public contract consumed by the dashboard template,
//! so changes here must stay backwards compatible.

pub mod activity;
pub mod api;
pub mod bot;
pub mod container;
pub mod database;
pub mod game;
pub mod log;
pub mod resource;
pub mod stats;
pub mod user;
