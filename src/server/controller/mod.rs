//! HTTP request handlers.
//!
//! Each handler extracts its parameters, calls one service and converts the resulting
//! domain model into a DTO. Handlers never touch repositories directly.

pub mod activity;
pub mod bot;
pub mod database;
pub mod game;
pub mod log;
pub mod param;
pub mod stats;
pub mod system;
pub mod user;
