//! HTTP access to `env-api`.

pub mod client;

pub use client::{ClientError, EnvApiClient};
