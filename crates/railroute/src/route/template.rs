//! Route template types
//!
//! A route template is what the framework introspection step exports for each
//! named route: either a plain static path or a tree of parts. The JSON shape
//! is deliberately loose (bare strings, objects and nested arrays), so the
//! serde representation is `untagged` and the Rust side is a closed sum type.
use serde::{Deserialize, Serialize};
use std::fmt;

/// Template for one named route
///
/// # Examples
///
/// ```
/// use railroute::{Part, RouteTemplate};
///
/// let template: RouteTemplate =
///     serde_json::from_str(r#"["/foo/", {"name": "bar"}, ["/", {"name": "fizz"}]]"#).unwrap();
///
/// assert_eq!(
///     template,
///     RouteTemplate::Parts(vec![
///         Part::literal("/foo/"),
///         Part::param("bar"),
///         Part::group(vec![Part::literal("/"), Part::param("fizz")]),
///     ])
/// );
/// assert_eq!(template.to_string(), "/foo/:bar(/:fizz)");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RouteTemplate {
    /// A path without any parameters, rendered unchanged
    Static(String),
    /// Parts concatenated left to right
    Parts(Vec<Part>),
}

/// One element of a route template
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Part {
    /// Text copied verbatim
    Literal(String),
    /// Named parameter; `blob` marks a glob capture (`*name`)
    Param {
        name: String,
        #[serde(default, skip_serializing_if = "std::ops::Not::not")]
        blob: bool,
    },
    /// Optional sub-template, e.g. `(/:format)`
    Group(Vec<Part>),
}

/// A parameter reachable in a template, as reported by [`RouteTemplate::params`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamInfo {
    pub name: String,
    pub blob: bool,
    /// True when the parameter sits inside at least one group
    pub optional: bool,
}

impl Part {
    pub fn literal(text: impl Into<String>) -> Self {
        Part::Literal(text.into())
    }

    pub fn param(name: impl Into<String>) -> Self {
        Part::Param {
            name: name.into(),
            blob: false,
        }
    }

    pub fn blob(name: impl Into<String>) -> Self {
        Part::Param {
            name: name.into(),
            blob: true,
        }
    }

    pub fn group(children: Vec<Part>) -> Self {
        Part::Group(children)
    }
}

impl RouteTemplate {
    /// Builds a template from parts, collapsing a lone literal into `Static`
    /// the same way the route exporter does.
    pub fn from_parts(parts: Vec<Part>) -> Self {
        match parts.as_slice() {
            [Part::Literal(text)] => RouteTemplate::Static(text.clone()),
            _ => RouteTemplate::Parts(parts),
        }
    }

    pub fn is_static(&self) -> bool {
        matches!(self, RouteTemplate::Static(_))
    }

    /// Lists every parameter in order of appearance
    ///
    /// ```
    /// use railroute::{Part, RouteTemplate};
    ///
    /// let template = RouteTemplate::Parts(vec![
    ///     Part::literal("/wild"),
    ///     Part::group(vec![Part::literal("/"), Part::blob("blob")]),
    /// ]);
    ///
    /// let params = template.params();
    /// assert_eq!(params.len(), 1);
    /// assert!(params[0].blob && params[0].optional);
    /// ```
    pub fn params(&self) -> Vec<ParamInfo> {
        fn collect(parts: &[Part], optional: bool, out: &mut Vec<ParamInfo>) {
            for part in parts {
                match part {
                    Part::Literal(_) => {}
                    Part::Param { name, blob } => out.push(ParamInfo {
                        name: name.clone(),
                        blob: *blob,
                        optional,
                    }),
                    Part::Group(children) => collect(children, true, out),
                }
            }
        }

        let mut out = Vec::new();
        if let RouteTemplate::Parts(parts) = self {
            collect(parts, false, &mut out);
        }
        out
    }
}

impl fmt::Display for Part {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Part::Literal(text) => f.write_str(text),
            Part::Param { name, blob: false } => write!(f, ":{}", name),
            Part::Param { name, blob: true } => write!(f, "*{}", name),
            Part::Group(children) => {
                f.write_str("(")?;
                for child in children {
                    write!(f, "{}", child)?;
                }
                f.write_str(")")
            }
        }
    }
}

/// Formats the template in the framework's route syntax, e.g. `/thing(/thingy)/:id`
impl fmt::Display for RouteTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouteTemplate::Static(path) => f.write_str(path),
            RouteTemplate::Parts(parts) => parts.iter().try_for_each(|p| write!(f, "{}", p)),
        }
    }
}

impl From<&str> for RouteTemplate {
    fn from(path: &str) -> Self {
        RouteTemplate::Static(path.to_string())
    }
}

impl From<Vec<Part>> for RouteTemplate {
    fn from(parts: Vec<Part>) -> Self {
        RouteTemplate::Parts(parts)
    }
}
