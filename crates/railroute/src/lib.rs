//! # railroute
//!
//! Renders paths and URLs for named routes from a route table exported by a
//! web framework's router (e.g. Rails named routes):
//! - Static routes (`/things`)
//! - Named parameters (`/thing/:id`)
//! - Optional groups, nested to any depth (`/foo/:bar((/bark/:fizz)/:buzz)`)
//! - Glob parameters (`/wild(/*blob)`)
//!
//! Parameters that are not substituted into the path become the query
//! string, sorted by key with bracket notation for nested values. The
//! reserved keys `format`, `anchor` and `host` add a `.format` suffix, a
//! `#anchor`, and override the host for URLs.
//!
//! ## Example
//!
//! ```
//! use railroute::{Params, RouteConfig, RouteTable};
//!
//! let mut routes = RouteTable::new();
//! routes
//!     .register_json(
//!         r#"{
//!             "foo_bar": ["/foo/", {"name": "bar"}, ["/", {"name": "fizz"}, "/", {"name": "buzz"}]],
//!             "wild_a": ["/wild", ["/", {"name": "blob", "blob": true}]]
//!         }"#,
//!         Some(RouteConfig::with_host("http://example.com")),
//!     )
//!     .unwrap();
//!
//! assert_eq!(routes.path("foo_bar", Params::new().with("bar", "hello")).unwrap(), "/foo/hello");
//! assert_eq!(
//!     routes.path("foo_bar", Params::new().with("bar", "hello").with("fizz", "abc").with("buzz", 123)).unwrap(),
//!     "/foo/hello/abc/123"
//! );
//! assert_eq!(routes.path("wild_a", Params::new().with("blob", "/foo/bar/")).unwrap(), "/wild/foo/bar");
//! assert_eq!(
//!     routes.url("foo_bar", Params::new().with("bar", "x").with("page", 2)).unwrap(),
//!     "http://example.com/foo/x?page=2"
//! );
//! ```

// ============================================================================
// Module Declarations
// ============================================================================

mod error;
pub mod global;
mod params;
pub mod path;
pub mod route;

pub use error::RouteError;
pub use params::{is_valid_param, Params};
pub use path::{format_path, render, Rendered};
pub use route::{ParamInfo, Part, RouteConfig, RouteMap, RouteTable, RouteTemplate};

/// Result type for route lookup and formatting
pub type Result<T> = std::result::Result<T, RouteError>;
