pub mod controller;
pub mod data_table;
pub mod options;
pub mod sort_overlay;
pub mod styles;
pub mod widget;

pub use controller::TableController;
