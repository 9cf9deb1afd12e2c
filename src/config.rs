//! Runtime configuration
//!
//! Small env-driven config for the binaries. The library itself takes these
//! values as plain constructor arguments.

/// Environment variable for the web binary's bind address
pub const ENV_API_HOST: &str = "POLYREAD_API_HOST";
/// Environment variable for the auto-detect source-language fallback
pub const ENV_AUTO_SOURCE_FALLBACK: &str = "POLYREAD_AUTO_SOURCE_FALLBACK";

const DEFAULT_API_HOST: &str = "127.0.0.1:3000";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Bind address for the web binary
    pub api_host: String,
    /// Source language substituted for "auto" by providers without an
    /// auto-detect sentinel
    pub auto_source_fallback: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_host: DEFAULT_API_HOST.to_string(),
            auto_source_fallback: crate::translation::mymemory::DEFAULT_AUTO_SOURCE_FALLBACK
                .to_string(),
        }
    }
}

impl Config {
    /// Load configuration from the environment, falling back to defaults for
    /// unset or empty variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            api_host: env_or(ENV_API_HOST, &defaults.api_host),
            auto_source_fallback: env_or(ENV_AUTO_SOURCE_FALLBACK, &defaults.auto_source_fallback),
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    match std::env::var(key) {
        Ok(value) if !value.trim().is_empty() => value,
        _ => default.to_string(),
    }
}
