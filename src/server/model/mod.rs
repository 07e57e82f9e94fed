//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity rows at the repository boundary and
//! transformed to DTOs at the controller boundary. Derivations that do not need the
//! database (pagination math, personality, load factor, alert thresholds) live here as
//! plain functions.

pub mod activity;
pub mod alert;
pub mod bot;
pub mod container;
pub mod database;
pub mod game;
pub mod log;
pub mod personality;
pub mod resource;
pub mod user;
