//! Adapters implementing the outbound ports.

pub mod environment;

pub use environment::*;
