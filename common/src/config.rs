//! # Runtime Configuration
//!
//! The validated settings the daemon runs with, plus the parsers that turn raw
//! flag/environment strings into them. Everything here runs once at startup;
//! any error is fatal and happens before the first probe.

use std::time::Duration;

use thiserror::Error;

pub const DEFAULT_PORT: u16 = 1234;
pub const DEFAULT_HOSTS_SEPARATOR: &str = ",";
/// Phones are polled rarely while present to spare their battery.
pub const DEFAULT_DELAY_PRESENT_SECS: u64 = 300;
pub const DEFAULT_DELAY_ABSENT_SECS: u64 = 30;
pub const DEFAULT_TIMEOUT_SECS: u64 = 5;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("no hosts configured")]
    NoHosts,
    #[error("host entry #{position} is empty")]
    EmptyHost { position: usize },
    #[error("hosts separator must not be empty")]
    EmptySeparator,
    #[error("invalid port `{0}`: expected an integer between 1 and 65535")]
    InvalidPort(String),
    #[error("invalid delay `{0}`: expected a whole number of seconds")]
    InvalidDelay(String),
    #[error("probe timeout must be greater than zero")]
    ZeroTimeout,
    #[error("invalid webhook url `{0}`: expected http:// or https://")]
    InvalidWebhook(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Port probed on every host.
    pub port: u16,
    /// Hosts in probing order.
    pub hosts: Vec<String>,
    pub webhooks: Vec<String>,
    pub delay_present: Duration,
    pub delay_absent: Duration,
    /// Upper bound for a single connection attempt.
    pub timeout: Duration,
}

impl Config {
    /// A config with every optional setting at its default.
    pub fn with_hosts(hosts: Vec<String>) -> Self {
        Self {
            port: DEFAULT_PORT,
            hosts,
            webhooks: Vec::new(),
            delay_present: Duration::from_secs(DEFAULT_DELAY_PRESENT_SECS),
            delay_absent: Duration::from_secs(DEFAULT_DELAY_ABSENT_SECS),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

/// Splits the raw host list on `separator`.
///
/// Splitting an empty value yields one empty entry, which is rejected like any
/// other blank entry rather than probed.
pub fn split_hosts(raw: &str, separator: &str) -> Result<Vec<String>, ConfigError> {
    if separator.is_empty() {
        return Err(ConfigError::EmptySeparator);
    }

    let hosts: Vec<String> = raw
        .split(separator)
        .enumerate()
        .map(|(idx, part)| {
            let host = part.trim();
            if host.is_empty() {
                Err(ConfigError::EmptyHost { position: idx + 1 })
            } else {
                Ok(host.to_string())
            }
        })
        .collect::<Result<_, _>>()?;

    if hosts.is_empty() {
        return Err(ConfigError::NoHosts);
    }
    Ok(hosts)
}

/// Splits the raw webhook list on `separator`, skipping blank entries.
pub fn split_webhooks(raw: &str, separator: &str) -> Result<Vec<String>, ConfigError> {
    if separator.is_empty() {
        return Err(ConfigError::EmptySeparator);
    }

    raw.split(separator)
        .map(str::trim)
        .filter(|url| !url.is_empty())
        .map(|url| {
            if url.starts_with("http://") || url.starts_with("https://") {
                Ok(url.to_string())
            } else {
                Err(ConfigError::InvalidWebhook(url.to_string()))
            }
        })
        .collect()
}

pub fn parse_port(s: &str) -> Result<u16, ConfigError> {
    match s.trim().parse::<u16>() {
        Ok(port) if port > 0 => Ok(port),
        _ => Err(ConfigError::InvalidPort(s.to_string())),
    }
}

/// Parses a delay given in whole seconds. Zero is allowed.
pub fn parse_delay_secs(s: &str) -> Result<u64, ConfigError> {
    s.trim()
        .parse::<u64>()
        .map_err(|_| ConfigError::InvalidDelay(s.to_string()))
}

pub fn parse_timeout_secs(s: &str) -> Result<u64, ConfigError> {
    match parse_delay_secs(s)? {
        0 => Err(ConfigError::ZeroTimeout),
        secs => Ok(secs),
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
