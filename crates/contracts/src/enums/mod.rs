pub mod bulk_action;
pub mod sort_direction;

pub use bulk_action::BulkAction;
pub use sort_direction::SortDirection;
