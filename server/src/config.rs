use std::net::{IpAddr, SocketAddr};

/// Errors raised while reading configuration from the environment.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} must be {expected}, got {value:?}")]
    Invalid {
        var: &'static str,
        expected: &'static str,
        value: String,
    },
}

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Bind address (default: `127.0.0.1`).
    pub host: IpAddr,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Whether to start with the five sample todos (default: `true`).
    pub seed_sample_todos: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::from([127, 0, 0, 1]),
            port: 3000,
            seed_sample_todos: true,
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var             | Default     |
    /// |---------------------|-------------|
    /// | `HOST`              | `127.0.0.1` |
    /// | `PORT`              | `3000`      |
    /// | `SEED_SAMPLE_TODOS` | `true`      |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ServerConfig::from_env`] but reads values through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let host = match lookup("HOST") {
            Some(value) => value.trim().parse().map_err(|_| ConfigError::Invalid {
                var: "HOST",
                expected: "an IP address",
                value,
            })?,
            None => defaults.host,
        };

        let port = match lookup("PORT") {
            Some(value) => value.trim().parse().map_err(|_| ConfigError::Invalid {
                var: "PORT",
                expected: "a valid u16",
                value,
            })?,
            None => defaults.port,
        };

        let seed_sample_todos = match lookup("SEED_SAMPLE_TODOS") {
            Some(value) => parse_bool(&value).ok_or(ConfigError::Invalid {
                var: "SEED_SAMPLE_TODOS",
                expected: "a boolean",
                value,
            })?,
            None => defaults.seed_sample_todos,
        };

        Ok(Self {
            host,
            port,
            seed_sample_todos,
        })
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
