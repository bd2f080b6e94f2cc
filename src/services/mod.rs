pub mod loader_service;

pub use loader_service::{LoadSummary, LoaderService, RAW_TABLE_NAME};
