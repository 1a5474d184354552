pub mod api;
pub mod schemas;
