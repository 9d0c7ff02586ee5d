//! Application configuration loaded from environment variables.

use thiserror::Error;

/// Default TCP port when `PORT` is not set.
pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// `PORT` was set but is not a valid TCP port number.
    #[error("invalid PORT value {value:?}: {source}")]
    InvalidPort {
        value: String,
        source: std::num::ParseIntError,
    },
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// TCP port to listen on.
    pub port: u16,
}

impl Config {
    /// Read configuration from the process environment.
    ///
    /// An unset `PORT` falls back to [`DEFAULT_PORT`]; a set but unparseable
    /// value is a startup error rather than a silent default.
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = parse_port(std::env::var("PORT").ok())?;
        Ok(Self { port })
    }
}

fn parse_port(raw: Option<String>) -> Result<u16, ConfigError> {
    match raw {
        Some(value) => value
            .parse()
            .map_err(|source| ConfigError::InvalidPort { value, source }),
        None => Ok(DEFAULT_PORT),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_port_uses_default() {
        assert_eq!(parse_port(None).unwrap(), DEFAULT_PORT);
    }

    #[test]
    fn valid_port_is_parsed() {
        assert_eq!(parse_port(Some("4000".to_string())).unwrap(), 4000);
    }

    #[test]
    fn non_numeric_port_is_rejected() {
        let err = parse_port(Some("not-a-port".to_string())).unwrap_err();
        assert!(err.to_string().contains("not-a-port"));
    }

    #[test]
    fn out_of_range_port_is_rejected() {
        assert!(parse_port(Some("70000".to_string())).is_err());
    }
}
