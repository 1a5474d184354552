pub mod client;
pub mod typedefs;
