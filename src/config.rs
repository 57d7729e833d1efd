use std::env;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::Result;

const ENV_PREFIX: &str = "OPPORTUNITIES";
const DEFAULT_CONFIG_PATH: &str = "config.toml";
const DEFAULT_FRONTEND_ORIGIN: &str = "http://localhost:3000";

/// Top-level application configuration loaded from file + environment.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub cors: CorsSection,
    pub logging: LoggingSection,
}

impl AppConfig {
    /// Load configuration from disk and environment.
    ///
    /// The file path comes from `OPPORTUNITIES_CONFIG`, falling back to
    /// `config.toml` in the working directory. A missing file is not an error.
    pub fn load() -> Result<Self> {
        let config_path = env::var(format!("{ENV_PREFIX}_CONFIG"))
            .unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());

        Self::load_from(Path::new(&config_path))
    }

    /// Load configuration from the given file (if it exists) and environment.
    pub fn load_from(path: &Path) -> Result<Self> {
        let mut builder = config::Config::builder();

        if path.exists() {
            builder = builder.add_source(config::File::from(PathBuf::from(path)));
        }

        builder = builder.add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .list_separator(",")
                .with_list_parse_key("cors.allowed_origins")
                .try_parsing(true),
        );

        let settings = builder.build()?;
        let config: Self = settings.try_deserialize()?;

        Ok(config.normalized())
    }

    /// Parse configuration from an in-memory TOML document, without
    /// consulting the environment.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::from_str(source, config::FileFormat::Toml))
            .build()?;
        let config: Self = settings.try_deserialize()?;

        Ok(config.normalized())
    }

    /// Address the HTTP listener binds to.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    fn normalized(mut self) -> Self {
        if self.logging.level.trim().is_empty() {
            self.logging.level = "info".to_string();
        }
        self.cors.allowed_origins = self
            .cors
            .allowed_origins
            .into_iter()
            .map(|origin| origin.trim().to_string())
            .filter(|origin| !origin.is_empty())
            .collect();
        self
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
        }
    }
}

/// Cross-origin policy for browser clients.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CorsSection {
    /// Exact origins granted cross-origin access
    pub allowed_origins: Vec<String>,
    pub allow_credentials: bool,
}

impl Default for CorsSection {
    fn default() -> Self {
        Self {
            allowed_origins: vec![DEFAULT_FRONTEND_ORIGIN.to_string()],
            allow_credentials: true,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    pub level: String,
    pub format: LogFormat,
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Json,
    Text,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_frontend_deployment() {
        let config = AppConfig::default();

        assert_eq!(config.bind_address(), "0.0.0.0:8000");
        assert_eq!(config.cors.allowed_origins, vec!["http://localhost:3000"]);
        assert!(config.cors.allow_credentials);
        assert_eq!(config.logging.format, LogFormat::Json);
    }

    #[test]
    fn empty_document_yields_defaults() {
        let config = AppConfig::from_toml_str("").unwrap();

        assert_eq!(config.server.port, 8000);
        assert_eq!(config.logging.level, "info");
    }
}
