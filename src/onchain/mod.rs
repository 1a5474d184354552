pub mod abi;
pub mod pending;
pub mod tx;
pub mod typedefs;
