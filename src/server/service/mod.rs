//! Service layer for reporting logic and orchestration.
//!
//! This module sits between the controller (API) layer and the data (repository) layer.
//! Services are responsible for:
//!
//! - **Orchestration**: Combining several repository reads into one report
//! - **Derivation**: Applying windows, clamps and classifications to raw rows
//! - **Host Access**: Sampling OS metrics and invoking the container runtime CLI
//!
//! Every service is read-only. Each call re-queries the store; nothing is cached.

pub mod activity;
pub mod alert;
pub mod bot;
pub mod container;
pub mod database;
pub mod game;
pub mod log;
pub mod resource;
pub mod user;
