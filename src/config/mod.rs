//! Configuration handling for the application.
//!
//! Everything is read from environment variables with sensible development
//! defaults, so the service starts with no configuration at all. The
//! `Config::from_env` method performs the loading and is the single place
//! where validation can be added later.

use std::env;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Environment variable names. Keeping them public lets other crates (tests,
/// build scripts) refer to them if needed later.
pub const ENV_BIND_ADDR: &str = "BIND_ADDR";
pub const ENV_JWT_SECRET: &str = "JWT_SECRET";
pub const ENV_CREDENTIALS_PATH: &str = "CREDENTIALS_PATH";
pub const ENV_SUMMARIZER_URL: &str = "SUMMARIZER_URL";

/// Default development values used when environment variables are absent.
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";
const DEFAULT_JWT_SECRET: &str = "dev-secret-change-me";
const DEFAULT_CREDENTIALS_PATH: &str = "user_data.json";
const DEFAULT_SUMMARIZER_URL: &str = "http://127.0.0.1:8600/summarize";

/// Application runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    bind_addr: String,
    jwt_secret: String,
    credentials_path: String,
    summarizer_url: String,
}

impl Config {
    /// Create a new config explicitly.
    pub fn new(
        bind_addr: impl Into<String>,
        jwt_secret: impl Into<String>,
        credentials_path: impl Into<String>,
        summarizer_url: impl Into<String>,
    ) -> Self {
        Self {
            bind_addr: bind_addr.into(),
            jwt_secret: jwt_secret.into(),
            credentials_path: credentials_path.into(),
            summarizer_url: summarizer_url.into(),
        }
    }

    /// Load from environment variables, falling back to development defaults.
    ///
    /// This never fails today because we only do simple string extraction.
    /// In the future, validation (e.g. parse addresses, minimum secret length)
    /// can cause it to return a `ConfigError`.
    pub fn from_env() -> Result<Self, ConfigError> {
        let bind_addr = env::var(ENV_BIND_ADDR).unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());
        let jwt_secret =
            env::var(ENV_JWT_SECRET).unwrap_or_else(|_| DEFAULT_JWT_SECRET.to_string());
        let credentials_path = env::var(ENV_CREDENTIALS_PATH)
            .unwrap_or_else(|_| DEFAULT_CREDENTIALS_PATH.to_string());
        let summarizer_url =
            env::var(ENV_SUMMARIZER_URL).unwrap_or_else(|_| DEFAULT_SUMMARIZER_URL.to_string());
        // Placeholder spot for future validation hooks.
        Ok(Self {
            bind_addr,
            jwt_secret,
            credentials_path,
            summarizer_url,
        })
    }

    /// TCP bind address (host:port) for the HTTP server.
    pub fn bind_addr(&self) -> &str {
        &self.bind_addr
    }
    /// Secret used for signing/verifying JWTs.
    pub fn jwt_secret(&self) -> &str {
        &self.jwt_secret
    }
    /// Path of the JSON file holding the username -> password-hash mapping.
    pub fn credentials_path(&self) -> &str {
        &self.credentials_path
    }
    /// Endpoint of the external summarization inference service.
    pub fn summarizer_url(&self) -> &str {
        &self.summarizer_url
    }

    /// Development defaults (mirrors `from_env` with no env overrides).
    pub fn default() -> Self {
        // not `Default` impl yet to keep explicit semantics
        Self::new(
            DEFAULT_BIND_ADDR,
            DEFAULT_JWT_SECRET,
            DEFAULT_CREDENTIALS_PATH,
            DEFAULT_SUMMARIZER_URL,
        )
    }
}

/// Errors that can occur while building a configuration.
#[derive(Debug)]
pub enum ConfigError {
    /// Reserved for future validation failures.
    InvalidValue { field: &'static str, reason: String },
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::InvalidValue { field, reason } => {
                write!(f, "invalid value for '{}': {}", field, reason)
            }
        }
    }
}

impl Error for ConfigError {}
