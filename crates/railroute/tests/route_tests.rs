//! Integration tests for railroute
//!
//! Runs the formatter against `fixtures/routes.json`, an export of this
//! route file:
//!
//! ```ruby
//! root to
//! get 'things', to: to
//! get 'thing/:id', to: to, as: :thing
//! get 'thing(/thingy)/:id', to: to, as: :thingy
//! get 'foo/:bar(/:fizz/:buzz)', to: to, as: :foo_bar
//! get 'foo/:bar((/bark/:fizz)/:buzz)', to: to, as: :foo_bark
//! get 'wild(/*blob)', to: to, as: :wild_a
//! get 'wild/(*blob)', to: to, as: :wild_b
//! get 'wild/*blob', to: to, as: :wild_c
//! ```

use pretty_assertions::assert_eq;
use railroute::*;
use serde_json::json;

const ROUTES_JSON: &str = include_str!("fixtures/routes.json");

fn routes() -> RouteTable {
    let mut routes = RouteTable::new();
    routes
        .register_json(ROUTES_JSON, Some(RouteConfig::with_host("http://example.com")))
        .unwrap();
    routes
}

fn path(name: &str, params: impl Into<Params>) -> String {
    routes().path(name, params).unwrap()
}

fn assert_missing(result: Result<String>) {
    match result {
        Err(err @ RouteError::MissingParameter { .. }) => {
            assert!(err.to_string().starts_with("Missing required parameter"));
        }
        other => panic!("expected MissingParameter, got {other:?}"),
    }
}

// ============================================================================
// Static routes
// ============================================================================

#[test]
fn test_static_path() {
    assert_eq!(path("things", ()), "/things");
    assert_eq!(path("root", ()), "/");
    assert_eq!(routes().url("things", ()).unwrap(), "http://example.com/things");
}

#[test]
fn test_static_extra_params_become_query() {
    assert_eq!(
        path("things", json!({"page": 2, "order": "desc", "id": 5})),
        "/things?id=5&order=desc&page=2"
    );
}

// ============================================================================
// Reserved keys
// ============================================================================

#[test]
fn test_url_anchors() {
    assert_eq!(path("things", json!({"anchor": "hello"})), "/things#hello");
    assert_eq!(path("things", json!({"anchor": ""})), "/things#");
    assert_eq!(path("things", json!({"anchor": []})), "/things#");
    assert_eq!(path("things", json!({"anchor": {}})), "/things#");
    assert_eq!(
        path(
            "things",
            json!({"anchor": {"wow": {"foo": ["bar", "buzz"], "cats": "garfield"}}})
        ),
        "/things#wow%5Bcats%5D=garfield&wow%5Bfoo%5D%5B%5D=bar&wow%5Bfoo%5D%5B%5D=buzz"
    );
    assert_eq!(
        path("things", json!({"anchor": 123, "other": 456})),
        "/things?other=456#123"
    );
    assert_eq!(path("things", json!({"anchor": "cool/beans"})), "/things#cool%2Fbeans");
    assert_eq!(path("things", json!({"anchor": null})), "/things");
    assert_eq!(path("things", json!({"anchor": false})), "/things");
    assert_eq!(path("things", json!({"anchor": true})), "/things#true");
}

#[test]
fn test_custom_host() {
    let params = json!({"host": "http://fizzbuzz.com"});
    assert_eq!(
        routes().url("things", params.clone()).unwrap(),
        "http://fizzbuzz.com/things"
    );
    assert_eq!(path("things", params), "/things");
}

#[test]
fn test_format_param() {
    assert_eq!(path("things", json!({"format": "json"})), "/things.json");

    assert_eq!(path("things", json!({"format": ""})), "/things");
    assert_eq!(path("things", json!({"format": null})), "/things");
    assert_eq!(path("things", json!({"format": true})), "/things");
    assert_eq!(path("things", json!({"format": []})), "/things");
    assert_eq!(path("things", json!({"format": {}})), "/things");
}

#[test]
fn test_format_with_params_query_and_anchor() {
    assert_eq!(
        path("thing", json!({"id": 1, "format": "xml", "q": "a", "anchor": "x"})),
        "/thing/1.xml?q=a#x"
    );
}

// ============================================================================
// Required parameters
// ============================================================================

#[test]
fn test_required_parameters() {
    assert_eq!(
        path("thing", json!({"id": "wow", "some": "query"})),
        "/thing/wow?some=query"
    );

    let routes = routes();
    assert_missing(routes.path("thing", ()));
    assert_missing(routes.path("thing", json!({})));
    assert_missing(routes.path("thing", json!({"id": {}})));
    assert_missing(routes.path("thing", json!({"some": "query"})));
    assert_missing(routes.path("thing", json!({"id": null})));
    assert_missing(routes.path("thing", json!(null)));
    assert_missing(routes.path("thing", json!({"id": false})));
    assert_missing(routes.path("thing", false));
    assert_missing(routes.path("thing", json!({"id": []})));
    assert_missing(routes.path("thing", json!([])));
    assert_missing(routes.path("thing", json!({"id": ""})));
    assert_missing(routes.path("thing", ""));

    assert_eq!(path("thing", true), "/thing/true");
    assert_eq!(path("thing", json!({"id": true})), "/thing/true");
}

#[test]
fn test_scalar_params_are_ids() {
    assert_eq!(path("thing", 42), "/thing/42");
    assert_eq!(path("thing", "slug"), "/thing/slug");
    assert_eq!(path("thing", json!(1.5)), "/thing/1.5");
}

#[test]
fn test_missing_parameter_names_route() {
    let err = routes().path("foo_bar", json!({"fizz": 1})).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Missing required parameter 'bar' for route 'foo_bar'"
    );
}

// ============================================================================
// Optional groups
// ============================================================================

#[test]
fn test_optional_static_parts() {
    assert_eq!(
        path("thingy", json!({"id": "wow", "some": "query"})),
        "/thing/thingy/wow?some=query"
    );
}

#[test]
fn test_optional_parameters() {
    assert_missing(routes().path("foo_bar", ()));

    assert_eq!(path("foo_bar", json!({"bar": "hello"})), "/foo/hello");
    assert_eq!(
        path("foo_bar", json!({"bar": "hello", "fizz": "abc"})),
        "/foo/hello?fizz=abc"
    );
    assert_eq!(
        path("foo_bar", json!({"bar": "hello", "buzz": 123})),
        "/foo/hello?buzz=123"
    );
    assert_eq!(
        path("foo_bar", json!({"bar": "hello", "fizz": "abc", "buzz": 123})),
        "/foo/hello/abc/123"
    );
}

#[test]
fn test_nested_optional_parameters() {
    assert_missing(routes().path("foo_bark", ()));

    assert_eq!(path("foo_bark", json!({"bar": "hello"})), "/foo/hello");
    assert_eq!(
        path("foo_bark", json!({"bar": "hello", "fizz": "abc"})),
        "/foo/hello?fizz=abc"
    );
    assert_eq!(
        path("foo_bark", json!({"bar": "hello", "buzz": 123})),
        "/foo/hello/123"
    );
    assert_eq!(
        path("foo_bark", json!({"bar": "hello", "fizz": "abc", "buzz": 123})),
        "/foo/hello/bark/abc/123"
    );
}

#[test]
fn test_group_with_invalid_value_is_skipped() {
    assert_eq!(
        path("foo_bar", json!({"bar": "hello", "fizz": "", "buzz": 1})),
        "/foo/hello?buzz=1&fizz="
    );
}

// ============================================================================
// Escaping
// ============================================================================

#[test]
fn test_escaped_parameters() {
    assert_eq!(
        path("thing", json!({"id": "escape/me", "other": "me/too"})),
        "/thing/escape%2Fme?other=me%2Ftoo"
    );

    // structured values cannot fill a named param
    assert_missing(routes().path(
        "thing",
        json!({"id": {"foo": ["bar", "buzz"], "cats": "garfield"}}),
    ));
    assert_missing(routes().path("thing", json!({"id": ["bar", {"foo": "buzz", "wow": 123}]})));

    assert_eq!(
        path("things", json!({"wow": {"foo": ["bar", "buzz"], "cats": "garfield"}})),
        "/things?wow%5Bcats%5D=garfield&wow%5Bfoo%5D%5B%5D=bar&wow%5Bfoo%5D%5B%5D=buzz"
    );
}

#[test]
fn test_unicode_is_percent_encoded() {
    assert_eq!(path("thing", "café"), "/thing/caf%C3%A9");
}

#[test]
fn test_sub_delims_stay_literal_in_path_and_anchor() {
    assert_eq!(path("thing", "it's(1)!"), "/thing/it's(1)!");
    assert_eq!(
        path("thing", json!({"id": 1, "anchor": "it's(1)!", "q": "it's(1)!"})),
        "/thing/1?q=it%27s%281%29%21#it's(1)!"
    );
}

#[test]
fn test_query_keys_sort_case_insensitively() {
    assert_eq!(
        path("things", json!({"apple": 1, "Zebra": 2, "page": 3})),
        "/things?apple=1&page=3&Zebra=2"
    );
}

#[test]
fn test_large_and_tiny_numbers_use_exponents() {
    assert_eq!(path("thing", json!(1e21)), "/thing/1e%2B21");
    assert_eq!(path("thing", json!({"id": 1e-7})), "/thing/1e-7");
}

// ============================================================================
// Glob parameters
// ============================================================================

#[test]
fn test_glob_patterns() {
    assert_eq!(path("wild_a", ()), "/wild");
    assert_eq!(path("wild_b", ()), "/wild");
    assert_missing(routes().path("wild_c", ()));

    assert_eq!(path("wild_a", json!({"blob": "foo/bar"})), "/wild/foo/bar");
    assert_eq!(path("wild_a", json!({"blob": "/foo/bar/"})), "/wild/foo/bar");
    assert_eq!(path("wild_c", json!({"blob": "/a/b/c"})), "/wild/a/b/c");
}

// ============================================================================
// Lookup and host errors
// ============================================================================

#[test]
fn test_route_not_found() {
    let routes = routes();
    assert!(matches!(
        routes.path("dne_thingy", ()),
        Err(RouteError::RouteNotFound { .. })
    ));
    assert_eq!(
        routes.url("dne_thingy", ()).unwrap_err().to_string(),
        "Route not found: dne_thingy"
    );
}

#[test]
fn test_host_unresolved() {
    let routes = RouteTable::from_json(ROUTES_JSON).unwrap();
    assert!(matches!(
        routes.url("things", ()),
        Err(RouteError::HostUnresolved)
    ));
    assert!(matches!(
        routes.url("things", json!({"host": ""})),
        Err(RouteError::HostUnresolved)
    ));
    assert_eq!(routes.path("things", ()).unwrap(), "/things");
}

#[test]
fn test_registration_is_additive() {
    let mut routes = routes();
    routes.register(
        [("thing", RouteTemplate::from("/replaced"))],
        None,
    );
    assert_eq!(routes.path("thing", ()).unwrap(), "/replaced");
    assert_eq!(routes.path("things", ()).unwrap(), "/things");
    assert_eq!(routes.host(), Some("http://example.com"));
    assert_eq!(routes.len(), 9);
}

// ============================================================================
// Consumed parameters
// ============================================================================

#[test]
fn test_consumed_are_params_with_valid_values() {
    let routes = routes();
    let template = routes.lookup("foo_bark").unwrap();
    let params = Params::from(json!({"bar": "a", "fizz": "b", "buzz": "", "extra": 1}));

    let rendered = render(template, &params, Some("foo_bark")).unwrap();
    let consumed: Vec<&str> = rendered.consumed.iter().map(String::as_str).collect();

    assert_eq!(consumed, vec!["bar"]);
    assert_eq!(
        routes.path("foo_bark", params).unwrap(),
        "/foo/a?buzz=&extra=1&fizz=b"
    );
}

#[test]
fn test_template_params_listing() {
    let routes = routes();
    let names: Vec<String> = routes
        .lookup("foo_bark")
        .unwrap()
        .params()
        .into_iter()
        .map(|p| p.name)
        .collect();
    assert_eq!(names, vec!["bar", "fizz", "buzz"]);
    assert_eq!(routes.lookup("wild_b").unwrap().to_string(), "/wild(/*blob)");
}
