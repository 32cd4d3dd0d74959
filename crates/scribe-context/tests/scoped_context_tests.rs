//! Integration tests for the scoped render context.

use scribe_context::{Bindings, ContextMap, ScopedContext, request};
use serde::{Deserialize, Serialize};
use serde_json::json;

/// Helper to build a context with request data, as an HTTP layer would.
fn request_context() -> ScopedContext {
    let mut ctx = ScopedContext::new();
    ctx.set(request::PATH, "/orders/17");
    ctx.set_nested(request::PARAMETERS, "page", "3");
    ctx.set_nested(request::PARAMETERS, "sort", "date");
    ctx.set_nested(request::HEADERS, "Accept-Language", "nl");
    ctx.set_nested(request::COOKIES, "theme", "dark");
    ctx.set_nested(request::SESSION, "user_id", 99);
    ctx
}

// ========== frames ==========

#[test]
fn test_new_context_has_root_frame() {
    let ctx = ScopedContext::new();
    assert_eq!(ctx.depth(), 1);
    assert!(ctx.innermost().is_empty());
}

#[test]
fn test_root_frame_is_never_popped() {
    let mut ctx = ScopedContext::new();
    ctx.set("kept", 1);
    assert!(ctx.pop().is_none());
    assert_eq!(ctx.depth(), 1);
    assert_eq!(ctx.get_int("kept"), Some(1));
}

#[test]
fn test_value_set_in_frame_disappears_after_pop() {
    let mut ctx = ScopedContext::new();
    ctx.push();
    ctx.set("title", "inner");
    assert_eq!(ctx.get_string("title").as_deref(), Some("inner"));

    let popped = ctx.pop().unwrap();
    assert_eq!(popped.get_string("title").as_deref(), Some("inner"));
    assert_eq!(ctx.get("title"), None);
}

#[test]
fn test_shadowed_value_reverts_after_pop() {
    let mut ctx = ScopedContext::new();
    ctx.set("title", "outer");
    ctx.push();
    ctx.set("title", "inner");
    assert_eq!(ctx.get_string("title").as_deref(), Some("inner"));
    let _frame = ctx.pop();
    assert_eq!(ctx.get_string("title").as_deref(), Some("outer"));
}

#[test]
fn test_nested_frame_sees_ancestor_bindings() {
    let mut ctx = ScopedContext::new();
    ctx.set("lang", "en");
    ctx.push();
    ctx.push();
    assert_eq!(ctx.depth(), 3);
    assert_eq!(ctx.get_string("lang").as_deref(), Some("en"));
}

#[test]
fn test_siblings_do_not_share_bindings() {
    let mut ctx = ScopedContext::new();

    ctx.push();
    ctx.set("first_only", true);
    let _first = ctx.pop();

    ctx.push();
    assert!(!ctx.contains_key("first_only"));
    let _second = ctx.pop();
}

#[test]
fn test_remove_clears_whole_chain() {
    let mut ctx = ScopedContext::new();
    ctx.set("flash", "saved");
    ctx.push();
    ctx.set("flash", "again");

    assert_eq!(ctx.remove("flash"), Some(json!("again")));
    assert!(!ctx.contains_key("flash"));

    let _frame = ctx.pop();
    assert!(!ctx.contains_key("flash"));
}

#[test]
fn test_remove_missing_key() {
    let mut ctx = ScopedContext::new();
    assert_eq!(ctx.remove("nothing"), None);
}

// ========== typed accessors ==========

#[test]
fn test_typed_accessors_with_fallbacks() {
    let mut ctx = ScopedContext::new();
    ctx.set("count", "12");
    ctx.set("ratio", 0.25);
    ctx.set("enabled", "true");
    ctx.set("big", 5_000_000_000_i64);

    assert_eq!(ctx.get_int("count"), Some(12));
    assert!((ctx.get_float("ratio").unwrap() - 0.25).abs() < f64::EPSILON);
    assert_eq!(ctx.get_bool("enabled"), Some(true));
    assert_eq!(ctx.get_long("big"), Some(5_000_000_000));

    assert_eq!(ctx.get_int("missing"), None);
    assert_eq!(ctx.get_int_or("missing", 7), 7);
    assert_eq!(ctx.get_long_or("missing", -1), -1);
    assert!(ctx.get_bool_or("missing", true));
    assert_eq!(ctx.get_string_or("missing", "none"), "none");
}

#[test]
fn test_unparsable_string_is_absent() {
    let mut ctx = ScopedContext::new();
    ctx.set("count", "twelve");
    assert_eq!(ctx.get_int("count"), None);
    assert_eq!(ctx.get_int_or("count", 0), 0);
}

#[test]
fn test_serialized_round_trip() {
    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Crumb {
        label: String,
        href: String,
    }

    let mut ctx = ScopedContext::new();
    let crumbs = vec![Crumb {
        label: "Home".to_string(),
        href: "/".to_string(),
    }];
    ctx.set_serialized("crumbs", &crumbs).unwrap();

    let back: Vec<Crumb> = ctx.get_as("crumbs").unwrap();
    assert_eq!(back, crumbs);
    assert_eq!(ctx.get_as::<u32>("crumbs"), None);
}

// ========== nested maps and request data ==========

#[test]
fn test_get_nested_map() {
    let ctx = request_context();
    let params = ctx.get_nested_map(request::PARAMETERS).unwrap();
    assert_eq!(params.get_int("page"), Some(3));
    assert_eq!(params.get_string("sort").as_deref(), Some("date"));
    assert!(ctx.get_nested_map(request::PATH).is_none());
    assert!(ctx.get_nested_map("absent").is_none());
}

#[test]
fn test_request_helpers() {
    let ctx = request_context();
    assert_eq!(ctx.request_path().as_deref(), Some("/orders/17"));
    assert_eq!(ctx.parameter("sort").as_deref(), Some("date"));
    assert_eq!(ctx.parameter("missing"), None);
    assert_eq!(ctx.header("accept-language").as_deref(), Some("nl"));
    assert_eq!(ctx.cookie("theme").as_deref(), Some("dark"));
    assert_eq!(ctx.session_value("user_id"), Some(&json!(99)));
}

#[test]
fn test_set_nested_in_frame_keeps_inherited_entries() {
    let mut ctx = request_context();
    ctx.push();
    ctx.set_nested(request::PARAMETERS, "extra", "x");

    assert_eq!(ctx.parameter("page").as_deref(), Some("3"));
    assert_eq!(ctx.parameter("extra").as_deref(), Some("x"));

    let _frame = ctx.pop();
    assert_eq!(ctx.parameter("page").as_deref(), Some("3"));
    assert_eq!(ctx.parameter("extra"), None);
}

#[test]
fn test_set_nested_in_frame_overrides_inherited_entry() {
    let mut ctx = request_context();
    ctx.push();
    ctx.set_nested(request::PARAMETERS, "page", "4");
    ctx.set_nested(request::PARAMETERS, "size", "20");
    assert_eq!(ctx.parameter("page").as_deref(), Some("4"));
    assert_eq!(ctx.parameter("sort").as_deref(), Some("date"));

    let _frame = ctx.pop();
    assert_eq!(ctx.parameter("page").as_deref(), Some("3"));
    assert_eq!(ctx.parameter("size"), None);
}

#[test]
fn test_set_nested_replaces_scalar() {
    let mut map = ContextMap::new();
    map.set("opts", 1);
    map.set_nested("opts", "a", "b");
    assert_eq!(
        map.get_nested_map("opts").and_then(|m| m.get_string("a")).as_deref(),
        Some("b")
    );
}

#[test]
fn test_reserved_keys() {
    assert!(request::is_reserved(request::COOKIES));
    assert!(!request::is_reserved("title"));
}

#[test]
fn test_context_map_from_iter() {
    let map: ContextMap = [("a", 1), ("b", 2)].into_iter().collect();
    assert_eq!(map.len(), 2);
    let ctx = ScopedContext::from(map);
    assert_eq!(ctx.get_int("b"), Some(2));
}
