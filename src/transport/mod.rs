// Transport layer for upstream node access
//
// Numan Thabit 2025 Nov

pub mod jsonrpc;

pub use jsonrpc::JsonRpc;
