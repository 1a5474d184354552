pub mod api;
pub mod constants;
pub mod schemas;
pub mod typedefs;
