//! Database repository layer for the game schema.
//!
//! This module contains repository structs that read the game's tables for each reporting
//! domain. Repositories use SeaORM entity models internally and return domain models to
//! keep the data layer separate from the service layer. The schema belongs to the game
//! server, so every repository is read-only.

pub mod airline;
pub mod bot;
pub mod database;
pub mod game;
pub mod log;
pub mod user;

#[cfg(test)]
mod test;
