pub mod de;
pub mod fetch;
pub mod jsonrpc;
pub mod misc;
