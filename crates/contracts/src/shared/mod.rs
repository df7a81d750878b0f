pub mod error;
pub mod page_config;
pub mod table_config;
