//! Structural validation of document values.
//!
//! The validator walks an arbitrary [`serde_json::Value`] depth-first in
//! document order and either produces a typed [`Document`] or stops at the
//! first structural defect. Every node object is closed: keys outside the
//! variant's allow-list are rejected.
//!
//! Blocks and inlines are mutually recursive through their `children`
//! lists; the recursion is plain function recursion on the decoder.

mod block;
mod children;
mod inline;
mod options;
mod text;

pub use options::ValidateOptions;

use serde_json::{Map, Value};

use crate::error::{ErrorKind, ValidationError};
use crate::model::Document;
use crate::path::{Path, Segment};

pub(crate) type Decoded<T> = std::result::Result<T, ValidationError>;

/// Validate a value as a document and return the typed tree.
pub fn decode(value: &Value, options: &ValidateOptions) -> Decoded<Document> {
    let mut decoder = Decoder::new(options);
    log::debug!("validating document value");

    match decoder.document(value) {
        Ok(doc) => {
            log::debug!(
                "document accepted: {} nodes, depth {}",
                decoder.visited,
                decoder.deepest
            );
            Ok(doc)
        }
        Err(err) => {
            log::debug!("document rejected: {}", err);
            Err(err)
        }
    }
}

/// Traversal state for a single validation call.
pub(crate) struct Decoder<'o> {
    options: &'o ValidateOptions,
    path: Path,
    depth: usize,
    deepest: usize,
    visited: usize,
}

impl<'o> Decoder<'o> {
    fn new(options: &'o ValidateOptions) -> Self {
        Self {
            options,
            path: Path::root(),
            depth: 0,
            deepest: 0,
            visited: 0,
        }
    }

    fn document(&mut self, value: &Value) -> Decoded<Document> {
        let blocks = self.sequence(value, |d, item| d.top_level(item))?;
        Ok(Document::from_blocks(blocks))
    }

    /// Error at the current location.
    fn fail(&self, kind: ErrorKind) -> ValidationError {
        ValidationError::new(self.path.clone(), kind)
    }

    /// Error at a member of the current location.
    fn fail_at(&self, segment: impl Into<Segment>, kind: ErrorKind) -> ValidationError {
        ValidationError::new(self.path.join(segment), kind)
    }

    /// Run `f` with `segment` appended to the path.
    fn enter<T>(
        &mut self,
        segment: impl Into<Segment>,
        f: impl FnOnce(&mut Self) -> Decoded<T>,
    ) -> Decoded<T> {
        self.path.push(segment);
        let result = f(self);
        self.path.pop();
        result
    }

    /// Run `f` one node level deeper, enforcing the depth limit.
    fn nested<T>(&mut self, f: impl FnOnce(&mut Self) -> Decoded<T>) -> Decoded<T> {
        self.depth += 1;
        self.visited += 1;
        self.deepest = self.deepest.max(self.depth);

        if let Some(limit) = self.options.max_depth {
            if self.depth > limit {
                self.depth -= 1;
                return Err(self.fail(ErrorKind::DepthExceeded { limit }));
            }
        }

        let result = f(self);
        self.depth -= 1;
        result
    }

    fn object<'v>(&self, value: &'v Value) -> Decoded<&'v Map<String, Value>> {
        value.as_object().ok_or_else(|| {
            self.fail(ErrorKind::TypeMismatch {
                expected: "an object",
                found: describe(value),
            })
        })
    }

    fn required<'v>(&self, obj: &'v Map<String, Value>, key: &'static str) -> Decoded<&'v Value> {
        obj.get(key)
            .ok_or_else(|| self.fail(ErrorKind::MissingField { field: key }))
    }

    fn string(&self, obj: &Map<String, Value>, key: &'static str) -> Decoded<String> {
        let value = self.required(obj, key)?;
        self.as_string(value, key)
    }

    fn optional_string(&self, obj: &Map<String, Value>, key: &'static str) -> Decoded<Option<String>> {
        obj.get(key).map(|v| self.as_string(v, key)).transpose()
    }

    fn as_string(&self, value: &Value, key: &'static str) -> Decoded<String> {
        match value {
            Value::String(s) => Ok(s.clone()),
            other => Err(self.fail_at(
                key,
                ErrorKind::TypeMismatch {
                    expected: "a string",
                    found: describe(other),
                },
            )),
        }
    }

    fn record(&self, obj: &Map<String, Value>, key: &'static str) -> Decoded<Map<String, Value>> {
        let value = self.required(obj, key)?;
        self.as_record(value, key)
    }

    fn as_record(&self, value: &Value, key: &'static str) -> Decoded<Map<String, Value>> {
        match value {
            Value::Object(map) => Ok(map.clone()),
            other => Err(self.fail_at(
                key,
                ErrorKind::TypeMismatch {
                    expected: "an object",
                    found: describe(other),
                },
            )),
        }
    }

    /// Reject any key not in `allowed`.
    fn closed(&self, obj: &Map<String, Value>, allowed: &[&str]) -> Decoded<()> {
        match obj.keys().find(|k| !allowed.contains(&k.as_str())) {
            Some(key) => Err(self.fail_at(
                key.as_str(),
                ErrorKind::ExcessProperty { key: key.clone() },
            )),
            None => Ok(()),
        }
    }
}

/// Short description of a value for error messages.
pub(crate) fn describe(value: &Value) -> String {
    const MAX_CHARS: usize = 32;

    match value {
        Value::Array(_) => "an array".to_string(),
        Value::Object(_) => "an object".to_string(),
        Value::String(s) if s.chars().count() > MAX_CHARS => {
            let head: String = s.chars().take(MAX_CHARS).collect();
            format!("\"{}...\"", head.escape_debug())
        }
        other => other.to_string(),
    }
}
