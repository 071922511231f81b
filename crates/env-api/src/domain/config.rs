//! API configuration with validation.
//!
//! Precedence: defaults, then TOML file, then `ENV_API_*` overrides, then CLI flags.

use crate::ports::EnvironmentSource;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

/// Public prefix marking a variable as safe for client-side exposure.
pub const DEFAULT_PUBLIC_PREFIX: &str = "NEXT_PUBLIC_";

/// Names exposed by the filtered policy regardless of prefix.
pub const DEFAULT_ALLOW_LIST: [&str; 7] = [
    "NODE_ENV",
    "NEXT_PUBLIC_APP_URL",
    "NEXT_PUBLIC_SITE_NAME",
    "NEXT_PUBLIC_API_URL",
    "VERCEL_ENV",
    "VERCEL_URL",
    "PORT",
];

/// Environment overrides read at startup.
pub mod env_keys {
    pub const HOST: &str = "ENV_API_HOST";
    pub const PORT: &str = "ENV_API_PORT";
    pub const POLICY: &str = "ENV_API_POLICY";
}

/// Main API configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// HTTP server configuration
    pub http: HttpConfig,
    /// Which variables are exposed
    pub exposure: ExposureConfig,
    /// CORS configuration
    pub cors: CorsConfig,
    /// Timeout configuration
    pub timeouts: TimeoutConfig,
}

impl ApiConfig {
    /// Load configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::Io {
            path: path.as_ref().display().to_string(),
            error: e.to_string(),
        })?;

        Self::parse(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Apply `ENV_API_*` overrides from the given environment.
    pub fn apply_env_overrides(&mut self, env: &dyn EnvironmentSource) -> Result<(), ConfigError> {
        if let Some(host) = env.get(env_keys::HOST) {
            self.http.host = host
                .parse()
                .map_err(|_| ConfigError::Invalid(format!("{}={}", env_keys::HOST, host)))?;
        }
        if let Some(port) = env.get(env_keys::PORT) {
            self.http.port = port
                .parse()
                .map_err(|_| ConfigError::InvalidPort(port.clone()))?;
        }
        if let Some(policy) = env.get(env_keys::POLICY) {
            self.exposure.policy = policy.parse()?;
        }
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.exposure.public_prefix.is_empty() {
            return Err(ConfigError::InvalidPrefix(
                "public_prefix cannot be empty".into(),
            ));
        }

        if self.exposure.allow_list.iter().any(|name| name.is_empty()) {
            return Err(ConfigError::Invalid(
                "allow_list entries cannot be empty".into(),
            ));
        }

        if self.timeouts.request.is_zero() {
            return Err(ConfigError::InvalidTimeout(
                "request timeout cannot be 0".into(),
            ));
        }

        Ok(())
    }

    /// Get HTTP server bind address
    pub fn http_addr(&self) -> SocketAddr {
        SocketAddr::new(self.http.host, self.http.port)
    }
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// Bind address
    pub host: IpAddr,
    /// Port (default: 3000)
    pub port: u16,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::new(0, 0, 0, 0)),
            port: 3000,
        }
    }
}

/// Whether the endpoint filters the environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum ExposurePolicy {
    /// Only public-prefixed or allow-listed names.
    #[default]
    Filtered,
    /// Every variable in the environment.
    Unfiltered,
}

impl FromStr for ExposurePolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "filtered" => Ok(Self::Filtered),
            "unfiltered" => Ok(Self::Unfiltered),
            other => Err(ConfigError::Invalid(format!(
                "unknown exposure policy '{}' (expected 'filtered' or 'unfiltered')",
                other
            ))),
        }
    }
}

impl TryFrom<String> for ExposurePolicy {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for ExposurePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Filtered => write!(f, "filtered"),
            Self::Unfiltered => write!(f, "unfiltered"),
        }
    }
}

/// Exposure configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExposureConfig {
    /// Filtered or unfiltered output
    pub policy: ExposurePolicy,
    /// Names starting with this prefix are exposed by the filtered policy
    pub public_prefix: String,
    /// Names always exposed by the filtered policy
    pub allow_list: Vec<String>,
    /// Substitute example entries when the filtered result is empty
    pub fallback_examples: bool,
}

impl Default for ExposureConfig {
    fn default() -> Self {
        Self {
            policy: ExposurePolicy::Filtered,
            public_prefix: DEFAULT_PUBLIC_PREFIX.to_string(),
            allow_list: DEFAULT_ALLOW_LIST.iter().map(|s| s.to_string()).collect(),
            fallback_examples: true,
        }
    }
}

impl ExposureConfig {
    /// Whether the filtered policy exposes `name`.
    pub fn is_exposed(&self, name: &str) -> bool {
        name.starts_with(&self.public_prefix) || self.allow_list.iter().any(|k| k == name)
    }
}

/// CORS configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CorsConfig {
    /// Enable CORS
    pub enabled: bool,
    /// Allowed origins ("*" for all)
    pub allowed_origins: Vec<String>,
    /// Allowed methods
    pub allowed_methods: Vec<String>,
    /// Allowed headers
    pub allowed_headers: Vec<String>,
    /// Max age for preflight cache
    pub max_age: u64,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            allowed_origins: vec!["*".to_string()],
            allowed_methods: vec!["GET".to_string(), "OPTIONS".to_string()],
            allowed_headers: vec!["Content-Type".to_string()],
            max_age: 86400, // 24 hours
        }
    }
}

/// Timeout configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Upper bound for a single request
    #[serde(with = "humantime_serde")]
    pub request: Duration,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self {
            request: Duration::from_secs(10),
        }
    }
}

/// Configuration errors
#[derive(Debug, Clone, thiserror::Error)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("cannot read config file {path}: {error}")]
    Io { path: String, error: String },
    /// Config file is not valid TOML for this schema
    #[error("cannot parse config: {0}")]
    Parse(String),
    /// Port override is not a valid port number
    #[error("invalid port: {0}")]
    InvalidPort(String),
    /// Public prefix is unusable
    #[error("invalid public prefix: {0}")]
    InvalidPrefix(String),
    /// Invalid timeout value
    #[error("invalid timeout: {0}")]
    InvalidTimeout(String),
    /// General configuration error
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Durations written as `10s`, `500ms`, `1m` or plain seconds.
mod humantime_serde {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if duration.subsec_millis() == 0 {
            serializer.serialize_str(&format!("{}s", duration.as_secs()))
        } else {
            serializer.serialize_str(&format!("{}ms", duration.as_millis()))
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        parse_duration(&s).map_err(serde::de::Error::custom)
    }

    pub(super) fn parse_duration(s: &str) -> Result<Duration, &'static str> {
        let s = s.trim();
        // "ms" before "s" and "m"
        if let Some(ms) = s.strip_suffix("ms") {
            ms.trim()
                .parse::<u64>()
                .map(Duration::from_millis)
                .map_err(|_| "invalid milliseconds")
        } else if let Some(secs) = s.strip_suffix('s') {
            secs.trim()
                .parse::<u64>()
                .map(Duration::from_secs)
                .map_err(|_| "invalid seconds")
        } else if let Some(mins) = s.strip_suffix('m') {
            mins.trim()
                .parse::<u64>()
                .map(|m| Duration::from_secs(m * 60))
                .map_err(|_| "invalid minutes")
        } else {
            s.parse::<u64>()
                .map(Duration::from_secs)
                .map_err(|_| "invalid duration format")
        }
    }
}
