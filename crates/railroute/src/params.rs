//! Parameter maps passed to `path` / `url`.
//!
//! Values are JSON values so that leftover parameters can carry nested
//! objects and arrays into the query string. Keys are kept sorted, which is
//! the order the query string is emitted in.

use serde_json::{Map, Value};
use std::collections::btree_map;
use std::collections::BTreeMap;

/// Keys pulled out of the map before rendering.
pub(crate) const ANCHOR: &str = "anchor";
pub(crate) const FORMAT: &str = "format";
pub(crate) const HOST: &str = "host";

/// Parameters for a single `path` / `url` call
///
/// # Examples
///
/// ```
/// use railroute::Params;
/// use serde_json::json;
///
/// let params = Params::new().with("id", 5).with("tab", "posts");
/// assert_eq!(params.len(), 2);
///
/// // A bare scalar is shorthand for `{ "id": value }`
/// assert_eq!(Params::from("wow"), Params::new().with("id", "wow"));
///
/// // ...unless it could never be a valid parameter
/// assert!(Params::from(json!(false)).is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Params(BTreeMap<String, Value>);

/// Returns true if `value` can be substituted for a named parameter.
///
/// Non-empty strings, numbers and `true` are valid; `false`, `null`, empty
/// strings, arrays and objects are not.
pub fn is_valid_param(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::Number(_) => true,
        Value::String(s) => !s.is_empty(),
        Value::Null | Value::Array(_) | Value::Object(_) => false,
    }
}

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.0.remove(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, Value> {
        self.0.iter()
    }

    /// Merges `other` into `self`; keys in `other` win.
    pub fn extend(&mut self, other: Params) {
        self.0.extend(other.0);
    }

    /// The call-site host override, if it is a non-empty string.
    pub fn host(&self) -> Option<&str> {
        self.0
            .get(HOST)
            .and_then(Value::as_str)
            .filter(|h| !h.is_empty())
    }
}

impl From<Value> for Params {
    fn from(value: Value) -> Self {
        match value {
            Value::Object(map) => Params::from(map),
            scalar if is_valid_param(&scalar) => Params::new().with("id", scalar),
            _ => Params::new(),
        }
    }
}

impl From<Option<Value>> for Params {
    fn from(value: Option<Value>) -> Self {
        value.map(Params::from).unwrap_or_default()
    }
}

impl From<Map<String, Value>> for Params {
    fn from(map: Map<String, Value>) -> Self {
        Params(map.into_iter().collect())
    }
}

impl From<BTreeMap<String, Value>> for Params {
    fn from(map: BTreeMap<String, Value>) -> Self {
        Params(map)
    }
}

impl From<()> for Params {
    fn from(_: ()) -> Self {
        Params::new()
    }
}

macro_rules! scalar_id {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Params {
                fn from(id: $ty) -> Self {
                    Params::from(Value::from(id))
                }
            }
        )*
    };
}

scalar_id!(&str, String, bool, i32, i64, u32, u64);

impl<K: Into<String>, V: Into<Value>, const N: usize> From<[(K, V); N]> for Params {
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Params {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Params(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl IntoIterator for Params {
    type Item = (String, Value);
    type IntoIter = btree_map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// Reserved keys taken out of a [`Params`] before it reaches the renderer.
#[derive(Debug, Default)]
pub(crate) struct Reserved {
    pub anchor: Option<Value>,
    pub format: Option<Value>,
}

impl Reserved {
    /// Removes `anchor`, `format` and `host` from `params`. The host is
    /// dropped here; `url` reads it before the path is formatted.
    pub fn extract(params: &mut Params) -> Self {
        params.remove(HOST);
        Reserved {
            anchor: params.remove(ANCHOR),
            format: params.remove(FORMAT),
        }
    }

    /// `.format` suffix, only for non-empty strings
    pub fn format_suffix(&self) -> Option<&str> {
        self.format
            .as_ref()
            .and_then(Value::as_str)
            .filter(|f| !f.is_empty())
    }
}
