//! Ports: abstractions the domain depends on.

pub mod outbound;

pub use outbound::*;
