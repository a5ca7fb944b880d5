//! Server configuration loaded from environment variables.
//!
//! | Variable | Default |
//! |----------|---------|
//! | `HOST` | `0.0.0.0` |
//! | `PORT` | `3001` |
//! | `NOTES_DB_PATH` | `db/db.json` |
//! | `NOTES_STORE` | `file` (or `memory`) |
//! | `PUBLIC_DIR` | `public` |
//! | `ALLOWED_ORIGINS` | `http://localhost:3001` (comma-separated) |
//! | `LOG_FORMAT` | `text` (or `json`) |
//! | `LOG_FILE` | unset, logs go to stdout |
//! | `LOG_ANSI` | auto-detected |

use std::fmt;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;

use notekeeper_core::defaults;
use thiserror::Error;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {name}: {value}")]
    InvalidValue { name: &'static str, value: String },

    #[error("Invalid store kind: {0}")]
    InvalidStore(String),

    #[error("Invalid listen address: {0}")]
    InvalidAddress(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Which [`notekeeper_core::NoteStore`] implementation backs the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StoreKind {
    #[default]
    File,
    Memory,
}

impl FromStr for StoreKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "file" | "json" => Ok(Self::File),
            "memory" => Ok(Self::Memory),
            _ => Err(ConfigError::InvalidStore(s.to_string())),
        }
    }
}

impl fmt::Display for StoreKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File => write!(f, "file"),
            Self::Memory => write!(f, "memory"),
        }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl LogFormat {
    fn parse(value: &str) -> Self {
        if value.eq_ignore_ascii_case("json") {
            Self::Json
        } else {
            Self::Text
        }
    }
}

/// Logging settings consumed by the binary's subscriber setup.
#[derive(Debug, Clone, Default)]
pub struct LogConfig {
    pub format: LogFormat,
    pub file: Option<PathBuf>,
    pub ansi: Option<bool>,
}

/// Full server configuration.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub host: String,
    pub port: u16,
    pub db_path: PathBuf,
    pub store: StoreKind,
    pub public_dir: PathBuf,
    pub allowed_origins: Vec<String>,
    pub log: LogConfig,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: defaults::HOST.to_string(),
            port: defaults::PORT,
            db_path: PathBuf::from(defaults::DB_PATH),
            store: StoreKind::File,
            public_dir: PathBuf::from(defaults::PUBLIC_DIR),
            allowed_origins: vec![defaults::ALLOWED_ORIGIN.to_string()],
            log: LogConfig::default(),
        }
    }
}

impl ApiConfig {
    /// Load from the process environment.
    pub fn from_env() -> ConfigResult<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load from an arbitrary variable lookup, falling back to defaults for
    /// anything unset.
    pub fn from_lookup<F>(lookup: F) -> ConfigResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(host) = lookup("HOST") {
            config.host = host;
        }
        if let Some(port) = lookup("PORT") {
            config.port = port.trim().parse().map_err(|_| ConfigError::InvalidValue {
                name: "PORT",
                value: port.clone(),
            })?;
        }
        if let Some(path) = lookup("NOTES_DB_PATH") {
            config.db_path = PathBuf::from(path);
        }
        if let Some(store) = lookup("NOTES_STORE") {
            config.store = store.parse()?;
        }
        if let Some(dir) = lookup("PUBLIC_DIR") {
            config.public_dir = PathBuf::from(dir);
        }
        if let Some(origins) = lookup("ALLOWED_ORIGINS") {
            let parsed = parse_origin_list(&origins);
            if !parsed.is_empty() {
                config.allowed_origins = parsed;
            }
        }

        config.log = LogConfig {
            format: lookup("LOG_FORMAT")
                .map(|v| LogFormat::parse(&v))
                .unwrap_or_default(),
            file: lookup("LOG_FILE").map(PathBuf::from),
            ansi: lookup("LOG_ANSI").map(|v| v == "true" || v == "1"),
        };

        Ok(config)
    }

    pub fn socket_addr(&self) -> ConfigResult<SocketAddr> {
        let addr = format!("{}:{}", self.host, self.port);
        addr.parse()
            .map_err(|_| ConfigError::InvalidAddress(addr.clone()))
    }
}

fn parse_origin_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = ApiConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 3001);
        assert_eq!(config.db_path, PathBuf::from("db/db.json"));
        assert_eq!(config.store, StoreKind::File);
        assert_eq!(config.public_dir, PathBuf::from("public"));
        assert_eq!(config.allowed_origins, vec!["http://localhost:3001"]);
        assert_eq!(config.log.format, LogFormat::Text);
        assert!(config.log.file.is_none());
        assert!(config.log.ansi.is_none());
    }

    #[test]
    fn test_port_override() {
        let config = ApiConfig::from_lookup(lookup_from(&[("PORT", "8080")])).unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(
            config.socket_addr().unwrap(),
            "0.0.0.0:8080".parse::<SocketAddr>().unwrap()
        );
    }

    #[test]
    fn test_invalid_port_is_error() {
        let err = ApiConfig::from_lookup(lookup_from(&[("PORT", "not-a-port")])).unwrap_err();
        assert_eq!(err.to_string(), "Invalid value for PORT: not-a-port");
    }

    #[test]
    fn test_invalid_host_is_address_error() {
        let config = ApiConfig::from_lookup(lookup_from(&[("HOST", "no host")])).unwrap();
        assert!(matches!(
            config.socket_addr(),
            Err(ConfigError::InvalidAddress(_))
        ));
    }

    #[test]
    fn test_store_kind_parse() {
        assert_eq!("file".parse::<StoreKind>().unwrap(), StoreKind::File);
        assert_eq!("JSON".parse::<StoreKind>().unwrap(), StoreKind::File);
        assert_eq!(" memory ".parse::<StoreKind>().unwrap(), StoreKind::Memory);
        assert!("redis".parse::<StoreKind>().is_err());
        assert_eq!(StoreKind::Memory.to_string(), "memory");
    }

    #[test]
    fn test_full_override() {
        let config = ApiConfig::from_lookup(lookup_from(&[
            ("HOST", "127.0.0.1"),
            ("NOTES_DB_PATH", "/tmp/notes.json"),
            ("NOTES_STORE", "memory"),
            ("PUBLIC_DIR", "/srv/public"),
            ("ALLOWED_ORIGINS", "http://a.test, ,http://b.test"),
            ("LOG_FORMAT", "JSON"),
            ("LOG_FILE", "/var/log/notekeeper.log"),
            ("LOG_ANSI", "false"),
        ]))
        .unwrap();

        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.db_path, PathBuf::from("/tmp/notes.json"));
        assert_eq!(config.store, StoreKind::Memory);
        assert_eq!(config.public_dir, PathBuf::from("/srv/public"));
        assert_eq!(config.allowed_origins, vec!["http://a.test", "http://b.test"]);
        assert_eq!(config.log.format, LogFormat::Json);
        assert_eq!(
            config.log.file,
            Some(PathBuf::from("/var/log/notekeeper.log"))
        );
        assert_eq!(config.log.ansi, Some(false));
    }

    #[test]
    fn test_blank_origins_keep_default() {
        let config = ApiConfig::from_lookup(lookup_from(&[("ALLOWED_ORIGINS", " , ")])).unwrap();
        assert_eq!(config.allowed_origins, vec!["http://localhost:3001"]);
    }
}
