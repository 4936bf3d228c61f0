//! # Configuration
//!
//! Secret store configuration resolved from the process environment.
//!
//! The rewriter is configured entirely through environment variables:
//!
//! - `STORE_NAME` (required): name of the secret store backing synthesized resources
//! - `STORE_KIND` (required): kind of the store reference (e.g. `SecretStore`, `ClusterSecretStore`)
//! - `REFRESH_INTERVAL` (optional): refresh interval for synthesized resources, defaults to `1h`
//!
//! Configuration is resolved once at startup and injected into the synthesizer,
//! so tests can construct a [`Config`] directly without touching the environment.

use thiserror::Error;

/// Environment variable naming the secret store
pub const STORE_NAME_VAR: &str = "STORE_NAME";

/// Environment variable naming the secret store kind
pub const STORE_KIND_VAR: &str = "STORE_KIND";

/// Environment variable overriding the refresh interval
pub const REFRESH_INTERVAL_VAR: &str = "REFRESH_INTERVAL";

/// Default refresh interval for synthesized ExternalSecret resources
pub const DEFAULT_REFRESH_INTERVAL: &str = "1h";

/// Error type for configuration resolution
///
/// A missing required variable is a fatal startup condition; the process must
/// not emit any output before configuration has resolved.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("environment variable '{0}' is not set")]
    MissingVariable(&'static str),
}

/// Secret store configuration for synthesized ExternalSecret resources
#[derive(Debug, Clone)]
pub struct Config {
    pub store_name: String,
    pub store_kind: String,
    pub refresh_interval: String,
}

impl Config {
    /// Resolve configuration from the process environment
    #[allow(
        clippy::missing_errors_doc,
        reason = "Error documentation is provided in doc comments"
    )]
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Resolve configuration through an arbitrary variable lookup
    ///
    /// This is the seam used by tests to resolve configuration deterministically
    /// without mutating the process environment.
    #[allow(
        clippy::missing_errors_doc,
        reason = "Error documentation is provided in doc comments"
    )]
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            store_name: require(&lookup, STORE_NAME_VAR)?,
            store_kind: require(&lookup, STORE_KIND_VAR)?,
            refresh_interval: lookup(REFRESH_INTERVAL_VAR)
                .filter(|value| !value.is_empty())
                .unwrap_or_else(|| DEFAULT_REFRESH_INTERVAL.to_string()),
        })
    }
}

/// An empty value counts as unset, matching the conventions of container
/// runtimes that template environment blocks unconditionally.
fn require<F>(lookup: &F, name: &'static str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(name)
        .filter(|value| !value.is_empty())
        .ok_or(ConfigError::MissingVariable(name))
}
