//! Route table
//!
//! Holds name → template mappings plus the default host used by `url`.
//! Tables are plain owned values; construct as many as needed (one per
//! test, one per exported application). See [`crate::global`] for the
//! process-wide table.
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use tracing::debug;

use super::RouteTemplate;
use crate::path::format_path;
use crate::{Params, Result, RouteError};

/// Route table payload as exported by the framework introspection step
pub type RouteMap = BTreeMap<String, RouteTemplate>;

/// Options accepted alongside a registration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteConfig {
    /// Default host for `url`, e.g. `https://example.com`
    #[serde(default)]
    pub host: Option<String>,
}

impl RouteConfig {
    pub fn with_host(host: impl Into<String>) -> Self {
        RouteConfig {
            host: Some(host.into()),
        }
    }
}

/// Named routes and the default host
///
/// # Examples
///
/// ```
/// use railroute::{Params, RouteConfig, RouteMap, RouteTable};
///
/// let mut routes = RouteTable::from_json(r#"{
///     "things": "/things",
///     "thing": ["/thing/", {"name": "id"}]
/// }"#).unwrap();
/// routes.register(RouteMap::new(), Some(RouteConfig::with_host("http://example.com")));
///
/// assert_eq!(routes.path("thing", Params::new().with("id", "wow").with("some", "query")).unwrap(),
///            "/thing/wow?some=query");
/// assert_eq!(routes.url("things", ()).unwrap(), "http://example.com/things");
/// ```
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    routes: HashMap<String, RouteTemplate>,
    host: Option<String>,
}

impl RouteTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a route table payload into a new table
    pub fn from_json(json: &str) -> Result<Self> {
        let mut table = RouteTable::new();
        table.register_json(json, None)?;
        Ok(table)
    }

    /// Merges `entries` into the table
    ///
    /// Existing names are overwritten. A `host` in `config` replaces the
    /// default host; a config without one leaves it untouched.
    pub fn register<I, K>(&mut self, entries: I, config: Option<RouteConfig>)
    where
        I: IntoIterator<Item = (K, RouteTemplate)>,
        K: Into<String>,
    {
        let before = self.routes.len();
        let mut count = 0usize;
        for (name, template) in entries {
            self.routes.insert(name.into(), template);
            count += 1;
        }

        debug!(
            registered = count,
            added = self.routes.len() - before,
            total = self.routes.len(),
            "registered routes"
        );

        if let Some(host) = config.and_then(|c| c.host).filter(|h| !h.is_empty()) {
            debug!(host = %host, "default host set");
            self.host = Some(host);
        }
    }

    /// Parses `json` as a route table payload and registers it
    pub fn register_json(&mut self, json: &str, config: Option<RouteConfig>) -> Result<()> {
        let entries: RouteMap = serde_json::from_str(json)?;
        self.register(entries, config);
        Ok(())
    }

    /// Looks up the template for `name`
    pub fn lookup(&self, name: &str) -> Result<&RouteTemplate> {
        self.routes
            .get(name)
            .ok_or_else(|| RouteError::not_found(name))
    }

    /// Formats the path for route `name`
    ///
    /// `params` takes anything convertible to [`Params`]: a map, a bare id,
    /// or `()` for no parameters.
    pub fn path(&self, name: &str, params: impl Into<Params>) -> Result<String> {
        let template = self.lookup(name)?;
        format_path(name, template, params.into())
    }

    /// Formats the absolute URL for route `name`
    ///
    /// The host comes from a `host` param when given, otherwise from the
    /// table's default host.
    pub fn url(&self, name: &str, params: impl Into<Params>) -> Result<String> {
        let params = params.into();
        let host = params
            .host()
            .or(self.host.as_deref())
            .ok_or(RouteError::HostUnresolved)?
            .to_string();

        Ok(host + &self.path(name, params)?)
    }

    pub fn host(&self) -> Option<&str> {
        self.host.as_deref()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.routes.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Route names in sorted order
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.routes.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Routes in name order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &RouteTemplate)> {
        let mut entries: Vec<(&str, &RouteTemplate)> =
            self.routes.iter().map(|(k, v)| (k.as_str(), v)).collect();
        entries.sort_unstable_by(|a, b| a.0.cmp(b.0));
        entries.into_iter()
    }
}
