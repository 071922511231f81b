//! Cross-crate integration tests.

pub mod client_flow;
#[cfg(test)]
pub mod harness;
pub mod http_api;
