pub mod core;
pub mod db;
pub mod models;
pub mod output;
pub mod repo;
pub mod store;
