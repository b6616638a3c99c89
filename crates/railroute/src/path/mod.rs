//! Path formatting
//!
//! [`render`] turns a template into a path body. [`format_path`] wraps it
//! with the parts that live outside the template: the `.format` suffix, the
//! query string built from leftover parameters, and the `#anchor`.

pub mod encode;
mod renderer;

pub use renderer::{render, Rendered};

use crate::params::{Params, Reserved};
use crate::route::RouteTemplate;
use crate::Result;

/// Formats a full path for the route `name`
///
/// Output is `path[.format][?query][#anchor]`. `host` is dropped from the
/// params and never shows up in the query string.
///
/// ```
/// use railroute::path::format_path;
/// use railroute::{Params, Part, RouteTemplate};
///
/// let template = RouteTemplate::Parts(vec![Part::literal("/thing/"), Part::param("id")]);
/// let params = Params::new()
///     .with("id", "wow")
///     .with("some", "query")
///     .with("format", "json")
///     .with("anchor", "top");
///
/// assert_eq!(
///     format_path("thing", &template, params).unwrap(),
///     "/thing/wow.json?some=query#top"
/// );
/// ```
pub fn format_path(name: &str, template: &RouteTemplate, mut params: Params) -> Result<String> {
    let reserved = Reserved::extract(&mut params);
    let rendered = render(template, &params, Some(name))?;

    let mut out = rendered.path;

    if let Some(format) = reserved.format_suffix() {
        out.push('.');
        out.push_str(format);
    }

    let query = encode::encode_query(
        params
            .iter()
            .filter(|(key, _)| !rendered.consumed.contains(key.as_str()))
            .map(|(key, value)| (key.as_str(), value)),
    );
    if !query.is_empty() {
        out.push('?');
        out.push_str(&query);
    }

    if let Some(anchor) = reserved.anchor.as_ref().and_then(encode::encode_anchor) {
        out.push_str(&anchor);
    }

    Ok(out)
}
