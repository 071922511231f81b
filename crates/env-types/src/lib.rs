//! # Env Types Crate
//!
//! Wire types exchanged between the `env-api` server and its clients.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: the JSON shape of `GET /api/env` is defined
//!   once, here, and both sides serialize through it.
//! - **Count by Construction**: `EnvResponse::success` derives `count` from the
//!   mapping, so a success response can never disagree with itself.

pub mod response;

pub use response::*;

/// Path of the environment endpoint.
pub const ENV_ENDPOINT: &str = "/api/env";
