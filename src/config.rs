//! Configuration for model-service

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Prefix under which the model operations router is mounted
pub const API_PREFIX: &str = "/api/v1";

/// Path of the health check endpoint
pub const HEALTH_PATH: &str = "/health";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Listener settings
    #[serde(default)]
    pub server: ServerConfig,

    /// Metadata applied to the generated schema document
    #[serde(default)]
    pub api: ApiConfig,

    /// Documentation endpoints
    #[serde(default)]
    pub docs: DocsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Interface to bind (default: all interfaces)
    #[serde(default = "default_host")]
    pub host: String,

    /// HTTP port
    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_title")]
    pub title: String,

    #[serde(default = "default_description")]
    pub description: String,

    #[serde(default = "default_version")]
    pub version: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocsConfig {
    /// Swagger UI mount point
    #[serde(default = "default_docs_path")]
    pub docs_path: String,

    /// ReDoc page
    #[serde(default = "default_redoc_path")]
    pub redoc_path: String,

    /// Raw schema document
    #[serde(default = "default_openapi_path")]
    pub openapi_path: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            description: default_description(),
            version: default_version(),
        }
    }
}

impl Default for DocsConfig {
    fn default() -> Self {
        Self {
            docs_path: default_docs_path(),
            redoc_path: default_redoc_path(),
            openapi_path: default_openapi_path(),
        }
    }
}

impl Config {
    /// Load config from an explicit path, the user config file, or defaults
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config = match path {
            Some(path) => {
                if !path.exists() {
                    return Err(Error::Config(format!(
                        "Config file not found: {}",
                        path.display()
                    )));
                }
                Self::from_file(path)?
            }
            None => match Self::config_path() {
                Some(path) if path.exists() => Self::from_file(&path)?,
                _ => Config::default(),
            },
        };

        config.validate()?;
        Ok(config)
    }

    /// Parse a TOML config file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Default config location, e.g. ~/.config/model-service/config.toml
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("model-service").join("config.toml"))
    }

    /// Check that the configured values can be served together
    pub fn validate(&self) -> Result<()> {
        if self.api.title.trim().is_empty() {
            return Err(Error::Config("api.title must not be empty".into()));
        }
        if self.api.version.trim().is_empty() {
            return Err(Error::Config("api.version must not be empty".into()));
        }

        let paths = [
            ("docs.docs_path", &self.docs.docs_path),
            ("docs.redoc_path", &self.docs.redoc_path),
            ("docs.openapi_path", &self.docs.openapi_path),
        ];

        for (i, (name, path)) in paths.iter().enumerate() {
            if !path.starts_with('/') || path.len() < 2 || path.ends_with('/') {
                return Err(Error::Config(format!(
                    "{name} must be an absolute path below /, got {path:?}"
                )));
            }
            if path.contains(['{', '}'])
                || path
                    .split('/')
                    .any(|segment| segment.starts_with(':') || segment.starts_with('*'))
            {
                return Err(Error::Config(format!(
                    "{name} ({path}) must be a literal path without parameters or wildcards"
                )));
            }
            if path.as_str() == HEALTH_PATH || path.starts_with(API_PREFIX) {
                return Err(Error::Config(format!(
                    "{name} ({path}) collides with a service route"
                )));
            }
            if paths[..i].iter().any(|(_, other)| other == path) {
                return Err(Error::Config(format!("{name} ({path}) is used twice")));
            }
        }

        Ok(())
    }
}

// Default value functions

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    80
}

fn default_title() -> String {
    "model-service APIs".to_string()
}

fn default_description() -> String {
    "Model operations behind a versioned API, with health checks and interactive documentation."
        .to_string()
}

fn default_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

fn default_docs_path() -> String {
    "/docs".to_string()
}

fn default_redoc_path() -> String {
    "/redoc".to_string()
}

fn default_openapi_path() -> String {
    "/openapi.json".to_string()
}
