//! Request-derived data is stored as nested maps under these keys by
//! whatever HTTP layer populates the context. Nothing here parses HTTP.

/// The request path, stored as a plain string.
pub const PATH: &str = "request.path";
/// Query and form parameters, name to value.
pub const PARAMETERS: &str = "request.parameters";
/// Session attributes.
pub const SESSION: &str = "request.session";
/// Request headers, name to value.
pub const HEADERS: &str = "request.headers";
/// Request cookies, name to value.
pub const COOKIES: &str = "request.cookies";

/// All reserved keys.
pub const RESERVED: [&str; 5] = [PATH, PARAMETERS, SESSION, HEADERS, COOKIES];

/// Whether `key` is one of the reserved request keys.
#[must_use]
pub fn is_reserved(key: &str) -> bool {
    RESERVED.contains(&key)
}
