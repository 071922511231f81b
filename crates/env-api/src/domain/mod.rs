//! Domain layer: configuration, exposure rules and errors.

pub mod config;
pub mod error;
pub mod exposure;

pub use config::*;
pub use error::*;
pub use exposure::*;
