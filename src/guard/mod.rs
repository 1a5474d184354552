pub mod api;
pub mod typedefs;
