//! Errors returned by route lookup and formatting.

use thiserror::Error;

/// Everything that can go wrong while turning a route name into a path.
///
/// All variants are terminal for the call that produced them: nothing is
/// rendered when an error is returned.
#[derive(Debug, Error)]
pub enum RouteError {
    /// No route with this name has been registered.
    #[error("Route not found: {name}")]
    RouteNotFound { name: String },

    /// A required parameter (one outside every optional group) has no valid value.
    #[error("Missing required parameter '{param}' for route '{route}'")]
    MissingParameter { param: String, route: String },

    /// `url` was called without a `host` param and the table has no default host.
    #[error("Cannot determine url `host` from the params nor the route table config")]
    HostUnresolved,

    /// The route table payload is not valid JSON of the expected shape.
    #[error("Invalid route table: {0}")]
    InvalidTable(#[from] serde_json::Error),
}

impl RouteError {
    pub(crate) fn not_found(name: &str) -> Self {
        RouteError::RouteNotFound {
            name: name.to_string(),
        }
    }

    pub(crate) fn missing(param: impl Into<String>, route: &str) -> Self {
        RouteError::MissingParameter {
            param: param.into(),
            route: route.to_string(),
        }
    }
}
