pub mod content_db;
pub mod utils;
