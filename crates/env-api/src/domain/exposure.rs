//! Exposure rules: which variables leave the process.
//!
//! - `Filtered`: public-prefixed or allow-listed names only. An empty result
//!   is replaced by three example entries when `fallback_examples` is set.
//! - `Unfiltered`: the whole environment.

use crate::domain::config::{ExposureConfig, ExposurePolicy};
use crate::domain::error::EnvReadError;
use crate::ports::EnvironmentSource;
use env_types::EnvMap;

/// Value for `NODE_ENV` in the example set when the source has none.
pub const DEFAULT_NODE_ENV: &str = "development";

/// Names of the example entries, in output order.
pub const EXAMPLE_KEYS: [&str; 3] = ["EXAMPLE_VAR", "NEXT_PUBLIC_EXAMPLE", "NODE_ENV"];

/// Read `source` and apply the configured policy.
pub fn apply_policy(
    config: &ExposureConfig,
    source: &dyn EnvironmentSource,
) -> Result<EnvMap, EnvReadError> {
    let vars = source.read()?;

    match config.policy {
        ExposurePolicy::Unfiltered => Ok(vars),
        ExposurePolicy::Filtered => {
            let exposed = filter_exposed(config, vars);
            if exposed.is_empty() && config.fallback_examples {
                Ok(example_variables(source))
            } else {
                Ok(exposed)
            }
        }
    }
}

/// Keep only names the filtered policy exposes. Values are kept as-is.
pub fn filter_exposed(config: &ExposureConfig, vars: EnvMap) -> EnvMap {
    vars.into_iter()
        .filter(|(name, _)| config.is_exposed(name))
        .collect()
}

/// The placeholder set shown when nothing passes the filter.
pub fn example_variables(source: &dyn EnvironmentSource) -> EnvMap {
    let node_env = source
        .get("NODE_ENV")
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| DEFAULT_NODE_ENV.to_string());

    let mut vars = EnvMap::new();
    vars.insert("NODE_ENV".to_string(), node_env);
    vars.insert(
        "EXAMPLE_VAR".to_string(),
        "This is an example environment variable".to_string(),
    );
    vars.insert(
        "NEXT_PUBLIC_EXAMPLE".to_string(),
        "This is a public environment variable".to_string(),
    );
    vars
}
