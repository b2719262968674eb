//! Layered service configuration.

use config::{Config, Environment, File, FileFormat};
use scribe_error::{ConfigError, ScribeResult};
use scribe_inference::InferenceConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, instrument};

/// Bundled defaults, always the lowest-precedence source.
pub const DEFAULT_CONFIG: &str = include_str!("../scribe.toml");

/// Prefix for environment overrides, e.g. `SCRIBE__SERVER__PORT`.
pub const ENV_PREFIX: &str = "SCRIBE";

/// HTTP listener settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Interface to bind
    pub host: String,
    /// Port to bind
    pub port: u16,
    /// Browser origins allowed by CORS
    pub cors_origins: Vec<String>,
}

impl ServerConfig {
    /// `host:port` for the listener.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// SQLite settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Path of the database file
    pub url: String,
    /// Pool size
    pub max_connections: u32,
}

/// Log output settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogConfig {
    /// Filter used when `RUST_LOG` is unset
    pub level: String,
    /// Emit JSON lines instead of human-readable text
    pub json: bool,
}

/// Complete service configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScribeConfig {
    /// HTTP listener
    pub server: ServerConfig,
    /// Inference server connection
    pub inference: InferenceConfig,
    /// Generation history store
    pub database: DatabaseConfig,
    /// Logging
    pub log: LogConfig,
}

impl ScribeConfig {
    /// Load configuration with precedence: environment > user file > bundled default.
    ///
    /// Sources in order (later sources override earlier):
    /// 1. Bundled defaults (`scribe.toml` shipped with the crate)
    /// 2. `path` if given (required), otherwise `./scribe.toml` (optional)
    /// 3. `SCRIBE__SECTION__KEY` environment variables
    ///
    /// # Example
    ///
    /// ```no_run
    /// use scribe::ScribeConfig;
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let config = ScribeConfig::load(None)?;
    /// println!("listening on {}", config.server.bind_address());
    /// # Ok(())
    /// # }
    /// ```
    #[instrument]
    pub fn load(path: Option<&Path>) -> ScribeResult<Self> {
        debug!("Loading configuration");

        let mut builder =
            Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        builder = match path {
            Some(path) => builder.add_source(File::from(path).required(true)),
            None => builder.add_source(File::with_name("scribe").required(false)),
        };

        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__")
                .list_separator(",")
                .with_list_parse_key("server.cors_origins")
                .try_parsing(true),
        );

        Self::finish(builder)
    }

    /// Parse a TOML document layered over the bundled defaults.
    pub fn from_toml_str(toml: &str) -> ScribeResult<Self> {
        let builder = Config::builder()
            .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
            .add_source(File::from_str(toml, FileFormat::Toml));
        Self::finish(builder)
    }

    fn finish(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> ScribeResult<Self> {
        let config: Self = builder
            .build()
            .map_err(|e| ConfigError::new(format!("Failed to build configuration: {}", e)))?
            .try_deserialize()
            .map_err(|e| ConfigError::new(format!("Failed to parse configuration: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings the service cannot start with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.database.url.trim().is_empty() {
            return Err(ConfigError::new("database.url must not be empty"));
        }
        if self.database.max_connections == 0 {
            return Err(ConfigError::new("database.max_connections must be at least 1"));
        }
        if self.inference.base_url().trim().is_empty() {
            return Err(ConfigError::new("inference.base_url must not be empty"));
        }
        if *self.inference.timeout_secs() == 0 {
            return Err(ConfigError::new("inference.timeout_secs must be at least 1"));
        }
        Ok(())
    }
}

impl Default for ScribeConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 8000,
                cors_origins: vec![
                    "http://localhost:3000".to_string(),
                    "http://localhost:5173".to_string(),
                ],
            },
            inference: InferenceConfig::default(),
            database: DatabaseConfig {
                url: "blog_writer.db".to_string(),
                max_connections: 8,
            },
            log: LogConfig {
                level: "info".to_string(),
                json: false,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_defaults_match_default_impl() {
        let config = ScribeConfig::from_toml_str("").unwrap();
        assert_eq!(config, ScribeConfig::default());
        assert_eq!(config.server.bind_address(), "0.0.0.0:8000");
    }

    #[test]
    fn test_user_file_overrides_defaults() {
        let config = ScribeConfig::from_toml_str(
            r#"
            [server]
            port = 9000

            [inference]
            model = "qwen2.5-7b-instruct"
            timeout_secs = 60
            "#,
        )
        .unwrap();

        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.inference.model(), "qwen2.5-7b-instruct");
        assert_eq!(*config.inference.timeout_secs(), 60);
        assert_eq!(config.inference.base_url(), "http://localhost:1234");
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        assert!(ScribeConfig::from_toml_str("[database]\nmax_connections = 0").is_err());
        assert!(ScribeConfig::from_toml_str("[database]\nurl = \"\"").is_err());
        assert!(ScribeConfig::from_toml_str("[server]\nport = \"eighty\"").is_err());
    }
}
