pub mod config;
pub mod database;
pub mod errors;
pub mod repository;
pub mod server;
