pub mod actions;
pub mod advanced_filter;
pub mod app;
pub mod paginator;
pub mod table;
pub mod toolbar;
