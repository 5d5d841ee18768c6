//! Server configuration

use serde::{Deserialize, Serialize};

/// Store backend selection
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum StoreType {
    /// SQLite database through sqlx
    Sqlite {
        /// Database URL (default: "sqlite:posts.db")
        #[serde(default = "default_database_url")]
        url: String,
    },
    /// In-process store, contents lost on shutdown
    Memory,
}

impl Default for StoreType {
    fn default() -> Self {
        StoreType::Sqlite {
            url: default_database_url(),
        }
    }
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Server host
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Store backend
    #[serde(default)]
    pub store: StoreType,

    /// Log level used when RUST_LOG is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_database_url() -> String {
    "sqlite:posts.db".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            store: StoreType::default(),
            log_level: default_log_level(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables and config file
    ///
    /// Sources, later ones overriding earlier ones: `config/server.{toml,
    /// yaml,json}` if present, then `POSTS_`-prefixed environment variables.
    /// Fields not set by any source keep their defaults.
    pub fn load() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let config_result = config::Config::builder()
            .add_source(config::File::with_name("config/server").required(false))
            .add_source(config::Environment::with_prefix("POSTS"))
            .build();

        match config_result {
            Ok(cfg) => cfg
                .try_deserialize()
                .map_err(|e| anyhow::anyhow!("Failed to deserialize config: {}", e)),
            Err(e) => Err(anyhow::anyhow!("Failed to load config: {}", e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ServerConfig::default();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8080);
        assert_eq!(config.log_level, "info");
        assert!(matches!(config.store, StoreType::Sqlite { .. }));
    }

    #[test]
    fn test_default_store_url() {
        match StoreType::default() {
            StoreType::Sqlite { url } => assert_eq!(url, "sqlite:posts.db"),
            other => panic!("unexpected default store: {:?}", other),
        }
    }

    #[test]
    fn test_empty_source_fills_defaults() {
        let config: ServerConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8080);
        assert!(matches!(config.store, StoreType::Sqlite { .. }));
    }

    #[test]
    fn test_sqlite_store_deserialization() {
        let json = r#"{"type": "sqlite", "url": "sqlite::memory:"}"#;
        let store: StoreType = serde_json::from_str(json).unwrap();
        match store {
            StoreType::Sqlite { url } => assert_eq!(url, "sqlite::memory:"),
            other => panic!("unexpected store: {:?}", other),
        }
    }

    #[test]
    fn test_memory_store_deserialization() {
        let store: StoreType = serde_json::from_str(r#"{"type": "memory"}"#).unwrap();
        assert!(matches!(store, StoreType::Memory));
    }

    #[test]
    fn test_config_roundtrip() {
        let config = ServerConfig {
            host: "0.0.0.0".to_string(),
            port: 3000,
            store: StoreType::Memory,
            log_level: "debug".to_string(),
        };
        let json = serde_json::to_string(&config).unwrap();
        let parsed: ServerConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.host, "0.0.0.0");
        assert_eq!(parsed.port, 3000);
        assert!(matches!(parsed.store, StoreType::Memory));
    }
}
