//! Runtime configuration
//!
//! Every setting can be given as a command-line flag or an environment
//! variable. Defaults reproduce the stock behavior: the public Bing archive,
//! no request timeout, human-readable logs.

use std::time::Duration;

use clap::{Parser, ValueEnum};

/// Default base URL of the Bing image archive API
pub const DEFAULT_API_BASE: &str = "https://cn.bing.com";

/// Default host prefixed to the relative image URL
pub const DEFAULT_IMAGE_HOST: &str = "https://cn.bing.com";

/// Log output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Human-readable lines
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

/// Server configuration
#[derive(Debug, Clone, Parser)]
#[command(name = "bing-wallpaper-mcp")]
#[command(about = "MCP server exposing the Bing wallpaper of the day over stdio")]
#[command(version)]
pub struct ServerConfig {
    /// Base URL of the Bing image archive API
    #[arg(long, env = "BING_WALLPAPER_API_BASE", default_value = DEFAULT_API_BASE)]
    pub api_base: String,

    /// Host prefixed to the relative image URL in resource text
    #[arg(long, env = "BING_WALLPAPER_IMAGE_HOST", default_value = DEFAULT_IMAGE_HOST)]
    pub image_host: String,

    /// Per-request timeout in whole seconds, at least 1 (no timeout when omitted)
    #[arg(
        long = "request-timeout-secs",
        env = "BING_WALLPAPER_TIMEOUT_SECS",
        value_name = "SECS",
        value_parser = parse_timeout_secs
    )]
    pub timeout: Option<Duration>,

    /// Log output format
    #[arg(long, env = "BING_WALLPAPER_LOG_FORMAT", value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,
}

/// Parses a timeout given in whole seconds; must be at least 1
fn parse_timeout_secs(raw: &str) -> Result<Duration, String> {
    let secs: u64 = raw
        .trim()
        .parse()
        .map_err(|_| format!("'{}' is not a whole number of seconds", raw))?;
    if secs == 0 {
        return Err("timeout must be at least 1 second".to_string());
    }
    Ok(Duration::from_secs(secs))
}

impl ServerConfig {
    /// Request timeout, if configured
    pub fn request_timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Sets the API base URL (tests point this at a local mock server)
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }

    /// Sets the request timeout; `Duration::ZERO` clears it
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = (!timeout.is_zero()).then_some(timeout);
        self
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            api_base:   DEFAULT_API_BASE.to_string(),
            image_host: DEFAULT_IMAGE_HOST.to_string(),
            timeout:    None,
            log_format: LogFormat::Text,
        }
    }
}
