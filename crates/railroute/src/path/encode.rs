//! Encoding helpers for path segments, query strings and anchors
//!
//! Path params and scalar anchors are escaped like a URI component
//! (`!'()*` stay literal). Query strings follow RFC 3986 strictly: everything
//! outside `A-Z a-z 0-9 - _ . ~` is escaped. Both escape exactly once.
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde_json::Value;
use std::borrow::Cow;
use std::cmp::Ordering;

/// Characters left unescaped in a URI component besides alphanumerics
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encodes a single URI component (`/` becomes `%2F`)
pub fn encode_component(text: &str) -> Cow<'_, str> {
    utf8_percent_encode(text, COMPONENT).into()
}

/// Percent-encodes a query key or value (RFC 3986 unreserved set only)
pub fn encode_query_part(text: &str) -> Cow<'_, str> {
    urlencoding::encode(text)
}

/// Alphabetical key order: case-insensitive, ties broken by byte order
///
/// ```
/// use railroute::path::encode::compare_keys;
/// use std::cmp::Ordering;
///
/// assert_eq!(compare_keys("apple", "Zebra"), Ordering::Less);
/// assert_eq!(compare_keys("B", "b"), Ordering::Less);
/// ```
pub fn compare_keys(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// String form of a scalar JSON value
///
/// Integral numbers print without a fractional part, matching how the
/// framework renders them. Arrays and objects have no scalar form and yield
/// an empty string.
pub fn scalar_to_string(value: &Value) -> Cow<'_, str> {
    match value {
        Value::String(s) => Cow::Borrowed(s.as_str()),
        Value::Bool(true) => Cow::Borrowed("true"),
        Value::Bool(false) => Cow::Borrowed("false"),
        Value::Number(n) => match (n.as_i64(), n.as_u64(), n.as_f64()) {
            (Some(i), _, _) => Cow::Owned(i.to_string()),
            (_, Some(u), _) => Cow::Owned(u.to_string()),
            (_, _, Some(f)) => Cow::Owned(float_to_string(f)),
            _ => Cow::Owned(n.to_string()),
        },
        Value::Null | Value::Array(_) | Value::Object(_) => Cow::Borrowed(""),
    }
}

/// Formats a float the way JavaScript prints numbers: exponent notation
/// below `1e-6` and from `1e21` up, with an explicit `+` on positive exponents
fn float_to_string(f: f64) -> String {
    let magnitude = f.abs();
    if f == 0.0 || !f.is_finite() || (1e-6..1e21).contains(&magnitude) {
        return f.to_string();
    }

    let formatted = format!("{:e}", f);
    match formatted.split_once('e') {
        Some((mantissa, exp)) if !exp.starts_with('-') => format!("{}e+{}", mantissa, exp),
        _ => formatted,
    }
}

/// Strips exactly one leading and one trailing `/` from a glob value
///
/// ```
/// use railroute::path::encode::trim_blob;
///
/// assert_eq!(trim_blob("/foo/bar/"), "foo/bar");
/// assert_eq!(trim_blob("foo/bar"), "foo/bar");
/// assert_eq!(trim_blob("//foo//"), "/foo/");
/// ```
pub fn trim_blob(blob: &str) -> &str {
    let blob = blob.strip_prefix('/').unwrap_or(blob);
    blob.strip_suffix('/').unwrap_or(blob)
}

/// Encodes key/value pairs as a query string without the leading `?`
///
/// Keys are sorted with [`compare_keys`] at every object level. Nested
/// objects use bracket notation (`a[b]=c`) and arrays use empty brackets
/// (`a[]=x`). Keys and
/// values are both percent-encoded, so brackets appear as `%5B` / `%5D`.
///
/// ```
/// use railroute::path::encode::encode_query;
/// use serde_json::json;
///
/// let wow = json!({"foo": ["bar", "buzz"], "cats": "garfield"});
/// assert_eq!(
///     encode_query([("wow", &wow)]),
///     "wow%5Bcats%5D=garfield&wow%5Bfoo%5D%5B%5D=bar&wow%5Bfoo%5D%5B%5D=buzz"
/// );
/// ```
pub fn encode_query<'a, I>(pairs: I) -> String
where
    I: IntoIterator<Item = (&'a str, &'a Value)>,
{
    let mut pairs: Vec<(&str, &Value)> = pairs.into_iter().collect();
    pairs.sort_by(|a, b| compare_keys(a.0, b.0));

    let mut out = Vec::new();
    for (key, value) in pairs {
        encode_pair(key.to_string(), value, &mut out);
    }
    out.join("&")
}

/// Encodes a whole value as a query string, the way structured anchors are
/// encoded. Top-level arrays are keyed by index.
pub fn encode_query_value(value: &Value) -> String {
    match value {
        Value::Object(map) => encode_query(map.iter().map(|(k, v)| (k.as_str(), v))),
        Value::Array(items) => {
            let mut out = Vec::new();
            for (idx, item) in items.iter().enumerate() {
                encode_pair(idx.to_string(), item, &mut out);
            }
            out.join("&")
        }
        _ => String::new(),
    }
}

fn encode_pair(prefix: String, value: &Value, out: &mut Vec<String>) {
    match value {
        Value::Array(items) => {
            let key = format!("{}[]", prefix);
            for item in items {
                encode_pair(key.clone(), item, out);
            }
        }
        Value::Object(map) => {
            let mut entries: Vec<(&String, &Value)> = map.iter().collect();
            entries.sort_by(|a, b| compare_keys(a.0, b.0));
            for (key, item) in entries {
                encode_pair(format!("{}[{}]", prefix, key), item, out);
            }
        }
        scalar => out.push(format!(
            "{}={}",
            encode_query_part(&prefix),
            encode_query_part(&scalar_to_string(scalar))
        )),
    }
}

/// `#anchor` suffix: nothing for null/false, query-encoded for structured
/// values, percent-encoded otherwise
pub fn encode_anchor(anchor: &Value) -> Option<String> {
    match anchor {
        Value::Null | Value::Bool(false) => None,
        Value::Array(_) | Value::Object(_) => Some(format!("#{}", encode_query_value(anchor))),
        scalar => Some(format!("#{}", encode_component(&scalar_to_string(scalar)))),
    }
}
