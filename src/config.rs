//! Runtime configuration.

/// Public GitHub REST API.
pub const DEFAULT_API_BASE: &str = "https://api.github.com";

/// Seconds to wait for the events request before giving up.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Runtime options shared by the binary and the library entry points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Enable debug logging
    pub debug: bool,
    /// Enable verbose (trace-level) logging
    pub verbose: bool,
    /// Base URL of the REST API (no trailing `/users/...`)
    pub api_base: String,
    /// Request timeout in seconds; `None` or `Some(0)` waits indefinitely
    pub timeout_secs: Option<u64>,
}

impl AppConfig {
    /// Default `EnvFilter` directive when `RUST_LOG` is unset.
    pub fn log_filter(&self) -> &'static str {
        if self.verbose {
            "trace"
        } else if self.debug {
            "debug,hyper=info,reqwest=info"
        } else {
            "warn"
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            debug: false,
            verbose: false,
            api_base: DEFAULT_API_BASE.to_string(),
            timeout_secs: Some(DEFAULT_TIMEOUT_SECS),
        }
    }
}
