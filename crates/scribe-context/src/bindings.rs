use serde::de::DeserializeOwned;

use scribe_common::warning::warn_once;

use crate::{NestedMap, Value};

/// Read access to string-keyed bindings with typed convenience accessors.
///
/// Implementors only supply [`Bindings::value`]. Numeric and boolean getters
/// parse string values on demand; a value that cannot be converted is
/// treated as absent and reported once through the warning system.
pub trait Bindings {
    /// The raw value bound to `key`, if any.
    fn value(&self, key: &str) -> Option<&Value>;

    /// Whether `key` is bound.
    fn contains_key(&self, key: &str) -> bool {
        self.value(key).is_some()
    }

    /// String form of the value. Numbers and booleans are formatted.
    fn get_string(&self, key: &str) -> Option<String> {
        match self.value(key)? {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            Value::Null | Value::Array(_) | Value::Object(_) => None,
        }
    }

    /// [`Bindings::get_string`] with a fallback.
    fn get_string_or(&self, key: &str, fallback: &str) -> String {
        self.get_string(key).unwrap_or_else(|| fallback.to_string())
    }

    /// The value as a 64-bit integer.
    fn get_long(&self, key: &str) -> Option<i64> {
        let value = self.value(key)?;
        let parsed = match value {
            Value::Number(n) => n.as_i64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        };
        if parsed.is_none() {
            unconvertible(key, value, "an integer");
        }
        parsed
    }

    /// [`Bindings::get_long`] with a fallback.
    fn get_long_or(&self, key: &str, fallback: i64) -> i64 {
        self.get_long(key).unwrap_or(fallback)
    }

    /// The value as a 32-bit integer. Out-of-range numbers count as absent.
    fn get_int(&self, key: &str) -> Option<i32> {
        self.get_long(key).and_then(|n| i32::try_from(n).ok())
    }

    /// [`Bindings::get_int`] with a fallback.
    fn get_int_or(&self, key: &str, fallback: i32) -> i32 {
        self.get_int(key).unwrap_or(fallback)
    }

    /// The value as a floating point number.
    fn get_float(&self, key: &str) -> Option<f64> {
        let value = self.value(key)?;
        let parsed = match value {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        };
        if parsed.is_none() {
            unconvertible(key, value, "a number");
        }
        parsed
    }

    /// [`Bindings::get_float`] with a fallback.
    fn get_float_or(&self, key: &str, fallback: f64) -> f64 {
        self.get_float(key).unwrap_or(fallback)
    }

    /// The value as a boolean. Strings must read `true` or `false`
    /// (ASCII case-insensitive).
    fn get_bool(&self, key: &str) -> Option<bool> {
        let value = self.value(key)?;
        let parsed = match value {
            Value::Bool(b) => Some(*b),
            Value::String(s) if s.trim().eq_ignore_ascii_case("true") => Some(true),
            Value::String(s) if s.trim().eq_ignore_ascii_case("false") => Some(false),
            _ => None,
        };
        if parsed.is_none() {
            unconvertible(key, value, "a boolean");
        }
        parsed
    }

    /// [`Bindings::get_bool`] with a fallback.
    fn get_bool_or(&self, key: &str, fallback: bool) -> bool {
        self.get_bool(key).unwrap_or(fallback)
    }

    /// The nested mapping stored under `key`, if the value is one.
    fn get_nested_map(&self, key: &str) -> Option<&NestedMap> {
        self.value(key).and_then(Value::as_object)
    }

    /// Deserialize the value into `T`. Shape mismatches count as absent.
    fn get_as<T: DeserializeOwned>(&self, key: &str) -> Option<T>
    where
        Self: Sized,
    {
        serde_json::from_value(self.value(key)?.clone()).ok()
    }
}

fn unconvertible(key: &str, value: &Value, wanted: &str) {
    warn_once("Context", &format!("value {value} for '{key}' is not {wanted}"));
}

impl Bindings for NestedMap {
    fn value(&self, key: &str) -> Option<&Value> {
        self.get(key)
    }
}
