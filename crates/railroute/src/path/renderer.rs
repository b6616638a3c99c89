//! Recursive template renderer
//!
//! Walks a [`Part`] tree against a [`Params`] map. Optional groups are
//! rendered as attempts: an attempt that hits a missing parameter contributes
//! nothing and consumes nothing, and only a miss at the top level becomes a
//! [`RouteError::MissingParameter`].
use std::collections::BTreeSet;
use tracing::trace;

use super::encode::{encode_component, scalar_to_string, trim_blob};
use crate::params::{is_valid_param, Params};
use crate::route::{Part, RouteTemplate};
use crate::{Result, RouteError};

/// Output of a successful render
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Rendered {
    /// Rendered path body (no format, query or anchor)
    pub path: String,
    /// Names of parameters substituted into `path`
    pub consumed: BTreeSet<String>,
}

/// Result of probing a part sequence
enum Attempt {
    Rendered(Rendered),
    /// First parameter that had no valid value
    Missing(String),
}

/// Renders a template
///
/// With `route_name` set this is a top-level render: a required parameter
/// without a valid value is an error. Without it the render is tentative and
/// a missing parameter degrades the whole template to an empty render.
///
/// # Examples
///
/// ```
/// use railroute::path::render;
/// use railroute::{Params, Part, RouteTemplate};
///
/// let template = RouteTemplate::Parts(vec![
///     Part::literal("/foo/"),
///     Part::param("bar"),
///     Part::group(vec![
///         Part::literal("/"),
///         Part::param("fizz"),
///         Part::literal("/"),
///         Part::param("buzz"),
///     ]),
/// ]);
///
/// let params = Params::new().with("bar", "hello").with("fizz", "abc");
/// let rendered = render(&template, &params, Some("foo_bar")).unwrap();
///
/// assert_eq!(rendered.path, "/foo/hello");
/// assert!(rendered.consumed.contains("bar"));
/// assert!(!rendered.consumed.contains("fizz"));
///
/// assert!(render(&template, &Params::new(), Some("foo_bar")).is_err());
/// assert_eq!(render(&template, &Params::new(), None).unwrap().path, "");
/// ```
pub fn render(
    template: &RouteTemplate,
    params: &Params,
    route_name: Option<&str>,
) -> Result<Rendered> {
    let parts = match template {
        RouteTemplate::Static(path) => {
            return Ok(Rendered {
                path: path.clone(),
                consumed: BTreeSet::new(),
            })
        }
        RouteTemplate::Parts(parts) => parts,
    };

    match (attempt(parts, params), route_name) {
        (Attempt::Rendered(rendered), _) => Ok(rendered),
        (Attempt::Missing(param), Some(route)) => Err(RouteError::missing(param, route)),
        (Attempt::Missing(_), None) => Ok(Rendered::default()),
    }
}

fn attempt(parts: &[Part], params: &Params) -> Attempt {
    let mut rendered = Rendered::default();

    for part in parts {
        match part {
            Part::Literal(text) => rendered.path.push_str(text),
            Part::Param { name, blob } => {
                let value = match params.get(name).filter(|v| is_valid_param(v)) {
                    Some(value) => value,
                    None => return Attempt::Missing(name.clone()),
                };

                let text = scalar_to_string(value);
                if *blob {
                    rendered.path.push_str(trim_blob(&text));
                } else {
                    rendered.path.push_str(&encode_component(&text));
                }
                rendered.consumed.insert(name.clone());
            }
            Part::Group(children) => match attempt(children, params) {
                Attempt::Rendered(group) => {
                    rendered.path.push_str(&group.path);
                    rendered.consumed.extend(group.consumed);
                }
                Attempt::Missing(param) => {
                    trace!(param = %param, "skipping optional group");
                }
            },
        }
    }

    Attempt::Rendered(rendered)
}
