use std::{env, net::SocketAddr};

use thiserror::Error;

const DEFAULT_BIND_ADDR: &str = "127.0.0.1";
const DEFAULT_BIND_PORT: u16 = 8080;

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: String,
    pub bind_port: u16,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must be a valid u16")]
    InvalidPort(&'static str),
    #[error("invalid bind address or port")]
    InvalidSocket,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from an arbitrary variable source.
    ///
    /// `BIND_PORT` wins over `FUNCTIONS_CUSTOMHANDLER_PORT`, which is the port
    /// a serverless function host hands to a custom handler process.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let bind_addr = read("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_port = match read("BIND_PORT") {
            Some(value) => parse_port("BIND_PORT", &value)?,
            None => read("FUNCTIONS_CUSTOMHANDLER_PORT")
                .map(|value| parse_port("FUNCTIONS_CUSTOMHANDLER_PORT", &value))
                .transpose()?
                .unwrap_or(DEFAULT_BIND_PORT),
        };

        let config = Self {
            bind_addr,
            bind_port,
        };

        let _ = config.bind_socket()?;
        Ok(config)
    }

    pub fn bind_socket(&self) -> Result<SocketAddr, ConfigError> {
        format!("{}:{}", self.bind_addr, self.bind_port)
            .parse::<SocketAddr>()
            .map_err(|_| ConfigError::InvalidSocket)
    }
}

fn parse_port(key: &'static str, value: &str) -> Result<u16, ConfigError> {
    value
        .parse::<u16>()
        .map_err(|_| ConfigError::InvalidPort(key))
}
