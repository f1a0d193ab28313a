pub mod app;
pub mod config;
pub mod db;
pub mod demo;
pub mod entries;
pub mod error;
pub mod extract;
pub mod state;
pub mod store;
pub mod users;
