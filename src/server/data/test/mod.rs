mod airline;
mod bot;
mod database;
mod game;
mod log;
mod user;
