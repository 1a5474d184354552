pub mod boost;
pub mod chains;
pub mod config;
pub mod guard;
pub mod modules;
pub mod onchain;
pub mod pinning;
pub mod subgraph;
pub mod utils;
