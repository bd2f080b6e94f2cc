pub mod config;
pub mod db;
pub mod error;
pub mod local_storage;
pub mod models;
pub mod services;
pub mod spreadsheet;
