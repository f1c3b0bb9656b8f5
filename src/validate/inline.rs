//! Link and relationship nodes.

use serde_json::{Map, Value};

use super::{describe, Decoded, Decoder};
use crate::error::ErrorKind;
use crate::model::{Inline, Link, Relationship, RelationshipData};

const INLINE_TYPES: [&str; 2] = ["link", "relationship"];

pub(super) fn is_inline_type(tag: &str) -> bool {
    INLINE_TYPES.contains(&tag)
}

impl Decoder<'_> {
    /// Decode a link or relationship whose `type` is already known.
    pub(super) fn inline_container(
        &mut self,
        obj: &Map<String, Value>,
        tag: &str,
    ) -> Decoded<Inline> {
        match tag {
            "link" => {
                let href = self.string(obj, "href")?;
                let children = self.inline_children(obj)?;
                self.closed(obj, &["type", "href", "children"])?;
                Ok(Inline::Link(Link { href, children }))
            }
            _ => {
                let relationship = self.string(obj, "relationship")?;
                let data = match obj.get("data") {
                    Some(value) => Some(self.enter("data", |d| d.relationship_data(value))?),
                    None => None,
                };
                let children = self.inline_children(obj)?;
                self.closed(obj, &["type", "relationship", "data", "children"])?;
                Ok(Inline::Relationship(Relationship {
                    relationship,
                    data,
                    children,
                }))
            }
        }
    }

    /// `{ id, label?, data? }`, closed.
    pub(super) fn relationship_data(&mut self, value: &Value) -> Decoded<RelationshipData> {
        let obj = value.as_object().ok_or_else(|| {
            self.fail(ErrorKind::TypeMismatch {
                expected: "relationship data",
                found: describe(value),
            })
        })?;

        let id = self.string(obj, "id")?;
        let label = self.optional_string(obj, "label")?;
        let data = obj
            .get("data")
            .map(|v| self.as_record(v, "data"))
            .transpose()?;
        self.closed(obj, &["id", "label", "data"])?;

        Ok(RelationshipData { id, label, data })
    }
}
