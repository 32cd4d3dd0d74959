use std::iter;

use serde::Serialize;

use crate::{Bindings, ContextMap, Value, request};

/// A stack of binding frames mirroring the nesting of render calls.
///
/// The root frame always exists and is never popped. Lookups walk from the
/// innermost frame outwards and return the nearest binding; writes always go
/// to the innermost frame, so they disappear when that frame is popped.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScopedContext {
    /// Bottom frame, alive for the whole render.
    root: ContextMap,
    /// Frames pushed by nested renders, innermost last.
    frames: Vec<ContextMap>,
}

impl ScopedContext {
    /// Create a context holding only an empty root frame.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a context whose root frame is `root`.
    #[must_use]
    pub const fn with_root(root: ContextMap) -> Self {
        Self {
            root,
            frames: Vec::new(),
        }
    }

    /// Enter a nested scope.
    ///
    /// Called by the canvas around each nested render; component code does
    /// not call this directly.
    pub fn push(&mut self) {
        self.frames.push(ContextMap::new());
    }

    /// Leave the innermost scope, returning its bindings.
    ///
    /// Returns `None` when only the root frame remains.
    pub fn pop(&mut self) -> Option<ContextMap> {
        self.frames.pop()
    }

    /// Number of active frames, the root included.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.frames.len() + 1
    }

    /// Bind `key` in the innermost frame, shadowing outer bindings.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.innermost_mut().set(key, value);
    }

    /// Serialize `value` and bind the result to `key`.
    ///
    /// # Errors
    ///
    /// Returns the serializer error if `value` cannot be represented as JSON.
    pub fn set_serialized<T: Serialize>(
        &mut self,
        key: impl Into<String>,
        value: &T,
    ) -> Result<(), serde_json::Error> {
        let value = serde_json::to_value(value)?;
        self.set(key, value);
        Ok(())
    }

    /// Bind `nested_key` in the nested map under `key` in the innermost frame.
    ///
    /// The first nested write to `key` in a frame starts from a copy of the
    /// map visible from outer frames, so inherited entries stay readable
    /// while the new one is scoped to this frame.
    pub fn set_nested(
        &mut self,
        key: impl Into<String>,
        nested_key: impl Into<String>,
        value: impl Into<Value>,
    ) {
        let key = key.into();
        let inherited = if self.innermost().contains_key(&key) {
            None
        } else {
            self.get_nested_map(&key).cloned()
        };
        if let Some(map) = inherited {
            self.innermost_mut().set(key.clone(), map);
        }
        self.innermost_mut().set_nested(key, nested_key, value);
    }

    /// The raw value visible for `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.value(key)
    }

    /// Remove `key` from every frame of the chain so it is no longer visible,
    /// returning the value that was visible.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        let mut visible = None;
        for frame in self.frames.iter_mut().rev().chain(iter::once(&mut self.root)) {
            if let Some(value) = frame.remove(key) {
                visible = visible.or(Some(value));
            }
        }
        visible
    }

    /// The innermost frame, for inspecting what the current scope added.
    #[must_use]
    pub fn innermost(&self) -> &ContextMap {
        self.frames.last().unwrap_or(&self.root)
    }

    fn innermost_mut(&mut self) -> &mut ContextMap {
        match self.frames.last_mut() {
            Some(frame) => frame,
            None => &mut self.root,
        }
    }

    fn chain(&self) -> impl Iterator<Item = &ContextMap> {
        self.frames.iter().rev().chain(iter::once(&self.root))
    }

    /// The request path stored under [`request::PATH`].
    #[must_use]
    pub fn request_path(&self) -> Option<String> {
        self.get_string(request::PATH)
    }

    /// A request parameter from [`request::PARAMETERS`].
    #[must_use]
    pub fn parameter(&self, name: &str) -> Option<String> {
        self.nested_string(request::PARAMETERS, name)
    }

    /// A session attribute from [`request::SESSION`].
    #[must_use]
    pub fn session_value(&self, name: &str) -> Option<&Value> {
        self.get_nested_map(request::SESSION)?.get(name)
    }

    /// A request header from [`request::HEADERS`]; names match ASCII
    /// case-insensitively.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<String> {
        let headers = self.get_nested_map(request::HEADERS)?;
        headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .and_then(|(k, _)| headers.get_string(k))
    }

    /// A cookie value from [`request::COOKIES`].
    #[must_use]
    pub fn cookie(&self, name: &str) -> Option<String> {
        self.nested_string(request::COOKIES, name)
    }

    fn nested_string(&self, key: &str, name: &str) -> Option<String> {
        self.get_nested_map(key)?.get_string(name)
    }
}

impl Bindings for ScopedContext {
    fn value(&self, key: &str) -> Option<&Value> {
        self.chain().find_map(|frame| frame.value(key))
    }
}

impl From<ContextMap> for ScopedContext {
    fn from(root: ContextMap) -> Self {
        Self::with_root(root)
    }
}
