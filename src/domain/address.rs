use std::fmt;
use std::str::FromStr;

use super::AppError;

/// Port the server binds to when no `[host:]port` argument is given.
pub const DEFAULT_PORT: u16 = 9999;

/// Address the ZEO server listens on.
///
/// Rendered as a bare `port` when there is no host, `host:port` otherwise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerAddress {
    host: Option<String>,
    port: u16,
}

impl ServerAddress {
    pub fn new(host: Option<String>, port: u16) -> Self {
        let host = host.filter(|h| !h.is_empty());
        Self { host, port }
    }

    pub fn host(&self) -> Option<&str> {
        self.host.as_deref()
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    /// Parse the optional positional argument; `None` yields the default address.
    pub fn from_arg(arg: Option<&str>) -> Result<Self, AppError> {
        match arg {
            Some(value) => value.parse(),
            None => Ok(Self::default()),
        }
    }
}

impl Default for ServerAddress {
    fn default() -> Self {
        Self { host: None, port: DEFAULT_PORT }
    }
}

impl FromStr for ServerAddress {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let (host, port) = match value.split_once(':') {
            Some((host, port)) => (Some(host.to_string()), port),
            None => (None, value),
        };

        let port = port.trim().parse::<u16>().map_err(|e| AppError::InvalidAddress {
            value: value.to_string(),
            reason: format!("port must be a number between 0 and 65535 ({})", e),
        })?;

        Ok(Self::new(host, port))
    }
}

impl fmt::Display for ServerAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.host {
            Some(host) => write!(f, "{}:{}", host, self.port),
            None => write!(f, "{}", self.port),
        }
    }
}
