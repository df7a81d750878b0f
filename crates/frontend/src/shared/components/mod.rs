pub mod alert;
pub mod bulk_toolbar;
pub mod load_all_notice;
pub mod previews;
pub mod priority_sort_select;
