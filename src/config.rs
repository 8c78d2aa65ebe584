//! Listener configuration parsed from environment variables.

use std::net::{IpAddr, SocketAddr};

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 5000;

/// Errors produced while reading site configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// `HOST` is not an IP address.
    #[error("invalid HOST '{0}': expected an IP address")]
    InvalidHost(String),

    /// `PORT` is not a 16-bit port number.
    #[error("invalid PORT '{0}': expected 0-65535")]
    InvalidPort(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SiteConfig {
    pub addr: SocketAddr,
}

impl SiteConfig {
    /// Build the listener config from environment variables.
    ///
    /// Optional:
    /// - `HOST`: default `0.0.0.0`
    /// - `PORT`: default `5000`
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_values(std::env::var("HOST").ok().as_deref(), std::env::var("PORT").ok().as_deref())
    }

    /// Build the listener config from raw `HOST` / `PORT` values.
    pub fn from_values(host: Option<&str>, port: Option<&str>) -> Result<Self, ConfigError> {
        let host = parse_host(host)?;
        let port = parse_port(port)?;
        Ok(Self { addr: SocketAddr::new(host, port) })
    }
}

fn parse_host(raw: Option<&str>) -> Result<IpAddr, ConfigError> {
    let value = raw.map(str::trim).filter(|v| !v.is_empty()).unwrap_or(DEFAULT_HOST);
    value.parse().map_err(|_| ConfigError::InvalidHost(value.to_owned()))
}

fn parse_port(raw: Option<&str>) -> Result<u16, ConfigError> {
    match raw.map(str::trim).filter(|v| !v.is_empty()) {
        None => Ok(DEFAULT_PORT),
        Some(value) => value.parse().map_err(|_| ConfigError::InvalidPort(value.to_owned())),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
