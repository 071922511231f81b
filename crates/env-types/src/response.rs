//! # Environment Snapshot
//!
//! The response body of `GET /api/env`:
//!
//! ```json
//! { "success": true, "environmentVariables": { "FOO": "bar" }, "count": 1 }
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Variable name to value. Sorted by name so output is deterministic.
pub type EnvMap = BTreeMap<String, String>;

/// Fixed message returned when the environment could not be read.
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch environment variables";

/// One snapshot of the exposed environment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvResponse {
    /// Whether the snapshot was read successfully.
    pub success: bool,
    /// Exposed variables.
    #[serde(default)]
    pub environment_variables: EnvMap,
    /// Number of entries in `environment_variables`.
    #[serde(default)]
    pub count: usize,
    /// Human-readable failure reason.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl EnvResponse {
    /// Build a success response; `count` is taken from the map.
    pub fn success(environment_variables: EnvMap) -> Self {
        Self {
            success: true,
            count: environment_variables.len(),
            environment_variables,
            error: None,
        }
    }

    /// Build a failure response with an empty mapping.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            environment_variables: EnvMap::new(),
            count: 0,
            error: Some(message.into()),
        }
    }

    /// The failure response for an unreadable environment.
    pub fn fetch_failed() -> Self {
        Self::failure(FETCH_FAILED_MESSAGE)
    }

    /// Whether the mapping has no entries.
    pub fn is_empty(&self) -> bool {
        self.environment_variables.is_empty()
    }
}
