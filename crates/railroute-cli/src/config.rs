use anyhow::{Context, Result};
use railroute::{RouteConfig, RouteTable};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Default config file looked up in the working directory
pub const CONFIG_FILE: &str = "railroute.toml";

/// CLI settings (railroute.toml), overridable from the command line
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Route table JSON exported from the application
    #[serde(default)]
    pub routes: Option<PathBuf>,
    /// Default host for `url`
    #[serde(default)]
    pub host: Option<String>,
}

impl Settings {
    /// Parse settings from a TOML string
    pub fn from_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Load settings from `path`, or from ./railroute.toml if it exists
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => {
                let default = PathBuf::from(CONFIG_FILE);
                if !default.exists() {
                    return Ok(Settings::default());
                }
                default
            }
        };

        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let settings = Self::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;

        debug!(path = %path.display(), "loaded config");
        Ok(settings)
    }

    pub fn with_routes(mut self, routes: Option<PathBuf>) -> Self {
        if routes.is_some() {
            self.routes = routes;
        }
        self
    }

    pub fn with_host(&self, host: Option<String>) -> Self {
        let mut settings = self.clone();
        if host.is_some() {
            settings.host = host;
        }
        settings
    }

    /// Reads the route table and registers it with the configured host
    pub fn load_routes(&self) -> Result<RouteTable> {
        let path = self
            .routes
            .as_ref()
            .context("No route table given; pass --routes or set `routes` in railroute.toml")?;

        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read route table {}", path.display()))?;

        let mut table = RouteTable::new();
        table
            .register_json(
                &json,
                Some(RouteConfig {
                    host: self.host.clone(),
                }),
            )
            .with_context(|| format!("Failed to load route table {}", path.display()))?;

        debug!(path = %path.display(), routes = table.len(), "loaded route table");
        Ok(table)
    }
}
