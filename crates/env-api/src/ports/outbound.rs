//! Outbound ports (driven side).

use crate::domain::error::EnvReadError;
use env_types::EnvMap;

/// Read access to a process environment.
///
/// Implementations are read-only; nothing in the service mutates the
/// environment it reports on.
pub trait EnvironmentSource: Send + Sync {
    /// Snapshot of every variable, ordered by name.
    fn read(&self) -> Result<EnvMap, EnvReadError>;

    /// Single variable lookup.
    fn get(&self, key: &str) -> Option<String> {
        self.read().ok().and_then(|mut vars| vars.remove(key))
    }
}
