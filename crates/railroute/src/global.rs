//! Process-wide route table
//!
//! Free-function front end over a lazily created [`RouteTable`], for
//! applications that register their routes once at startup and format paths
//! from anywhere afterwards. Prefer an owned [`RouteTable`] where one can be
//! passed around.
//!
//! ```
//! use railroute::{global, Params, RouteConfig};
//!
//! global::register_routes_json(
//!     r#"{"global_post": ["/posts/", {"name": "id"}]}"#,
//!     Some(RouteConfig::with_host("https://blog.example")),
//! )
//! .unwrap();
//!
//! assert_eq!(global::get_path("global_post", 7).unwrap(), "/posts/7");
//! assert_eq!(
//!     global::get_url("global_post", Params::new().with("id", 7)).unwrap(),
//!     "https://blog.example/posts/7"
//! );
//! ```

use once_cell::sync::Lazy;
use std::sync::{PoisonError, RwLock};

use crate::route::{RouteConfig, RouteTable, RouteTemplate};
use crate::{Params, Result};

static ROUTES: Lazy<RwLock<RouteTable>> = Lazy::new(|| RwLock::new(RouteTable::new()));

/// Merges `entries` into the process-wide table
pub fn register_routes<I, K>(entries: I, config: Option<RouteConfig>)
where
    I: IntoIterator<Item = (K, RouteTemplate)>,
    K: Into<String>,
{
    ROUTES
        .write()
        .unwrap_or_else(PoisonError::into_inner)
        .register(entries, config);
}

/// Parses a route table payload and merges it into the process-wide table
pub fn register_routes_json(json: &str, config: Option<RouteConfig>) -> Result<()> {
    ROUTES
        .write()
        .unwrap_or_else(PoisonError::into_inner)
        .register_json(json, config)
}

/// [`RouteTable::path`] on the process-wide table
pub fn get_path(name: &str, params: impl Into<Params>) -> Result<String> {
    with_routes(|routes| routes.path(name, params))
}

/// [`RouteTable::url`] on the process-wide table
pub fn get_url(name: &str, params: impl Into<Params>) -> Result<String> {
    with_routes(|routes| routes.url(name, params))
}

/// Runs `f` with shared access to the process-wide table
pub fn with_routes<R>(f: impl FnOnce(&RouteTable) -> R) -> R {
    let routes = ROUTES.read().unwrap_or_else(PoisonError::into_inner);
    f(&routes)
}
