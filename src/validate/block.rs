//! Block nodes.

use serde_json::{Map, Value};
use std::collections::BTreeMap;

use super::{describe, Decoded, Decoder};
use crate::error::ErrorKind;
use crate::model::{
    Block, ComponentBlock, ComponentProp, ComponentPropKind, Container, ContainerKind, Heading,
    HeadingLevel, Layout, Paragraph, PropPathSegment, RelationshipSelection, RelationshipValue,
    TextAlign,
};

pub(super) fn is_block_type(tag: &str) -> bool {
    matches!(tag, "layout" | "heading" | "paragraph" | "component-block")
        || ContainerKind::parse(tag).is_some()
        || ComponentPropKind::parse(tag).is_some()
}

impl Decoder<'_> {
    /// Decode a block whose `type` is already known to be a block literal.
    pub(super) fn block(&mut self, obj: &Map<String, Value>, tag: &str) -> Decoded<Block> {
        if let Some(kind) = ContainerKind::parse(tag) {
            let children = self.block_children(obj)?;
            self.closed(obj, &["type", "children"])?;
            return Ok(Block::Container(Container { kind, children }));
        }
        if let Some(kind) = ComponentPropKind::parse(tag) {
            return self.component_prop(obj, kind);
        }

        match tag {
            "layout" => self.layout(obj),
            "heading" => self.heading(obj),
            "paragraph" => self.paragraph(obj),
            _ => self.component_block(obj),
        }
    }

    fn layout(&mut self, obj: &Map<String, Value>) -> Decoded<Block> {
        let value = self.required(obj, "layout")?;
        let layout = self.enter("layout", |d| {
            let columns = d.array(value, "an array of numbers")?;
            let mut out = Vec::with_capacity(columns.len());
            for (index, column) in columns.iter().enumerate() {
                match column {
                    Value::Number(n) => out.push(n.clone()),
                    _ => {
                        return Err(d.fail_at(
                            index,
                            ErrorKind::TypeMismatch {
                                expected: "a number",
                                found: describe(column),
                            },
                        ))
                    }
                }
            }
            Ok(out)
        })?;
        let children = self.block_children(obj)?;
        self.closed(obj, &["type", "layout", "children"])?;

        Ok(Block::Layout(Layout { layout, children }))
    }

    fn heading(&mut self, obj: &Map<String, Value>) -> Decoded<Block> {
        let text_align = self.text_align(obj)?;
        let level = self.heading_level(obj)?;
        let children = self.block_children(obj)?;
        self.closed(obj, &["type", "textAlign", "level", "children"])?;

        Ok(Block::Heading(Heading {
            level,
            text_align,
            children,
        }))
    }

    fn paragraph(&mut self, obj: &Map<String, Value>) -> Decoded<Block> {
        let text_align = self.text_align(obj)?;
        let children = self.block_children(obj)?;
        self.closed(obj, &["type", "textAlign", "children"])?;

        Ok(Block::Paragraph(Paragraph {
            text_align,
            children,
        }))
    }

    fn component_block(&mut self, obj: &Map<String, Value>) -> Decoded<Block> {
        let component = self.string(obj, "component")?;
        let value = self.required(obj, "relationships")?;
        let relationships = self.enter("relationships", |d| d.relationship_values(value))?;
        let props = self.record(obj, "props")?;
        let children = self.block_children(obj)?;
        self.closed(
            obj,
            &["type", "component", "relationships", "props", "children"],
        )?;

        Ok(Block::ComponentBlock(ComponentBlock {
            component,
            relationships,
            props,
            children,
        }))
    }

    fn component_prop(
        &mut self,
        obj: &Map<String, Value>,
        kind: ComponentPropKind,
    ) -> Decoded<Block> {
        let value = self.required(obj, "propPath")?;
        let prop_path = self.enter("propPath", |d| {
            let segments = d.array(value, "an array of strings and numbers")?;
            let mut out = Vec::with_capacity(segments.len());
            for (index, segment) in segments.iter().enumerate() {
                match segment {
                    Value::String(s) => out.push(PropPathSegment::Key(s.clone())),
                    Value::Number(n) => out.push(PropPathSegment::Index(n.clone())),
                    other => {
                        return Err(d.fail_at(
                            index,
                            ErrorKind::TypeMismatch {
                                expected: "a string or number",
                                found: describe(other),
                            },
                        ))
                    }
                }
            }
            Ok(out)
        })?;
        let children = self.block_children(obj)?;
        self.closed(obj, &["type", "propPath", "children"])?;

        Ok(Block::ComponentProp(ComponentProp {
            kind,
            prop_path,
            children,
        }))
    }

    /// Relationship entries are open objects; only `relationship` and `data` are read.
    fn relationship_values(&mut self, value: &Value) -> Decoded<BTreeMap<String, RelationshipValue>> {
        let entries = value.as_object().ok_or_else(|| {
            self.fail(ErrorKind::TypeMismatch {
                expected: "an object",
                found: describe(value),
            })
        })?;

        let mut out = BTreeMap::new();
        for (name, entry) in entries {
            let decoded = self.enter(name.as_str(), |d| {
                let obj = d.object(entry)?;
                let relationship = d.string(obj, "relationship")?;
                let data = d.required(obj, "data")?;
                let data = d.enter("data", |d| d.relationship_selection(data))?;
                Ok(RelationshipValue { relationship, data })
            })?;
            out.insert(name.clone(), decoded);
        }
        Ok(out)
    }

    fn relationship_selection(&mut self, value: &Value) -> Decoded<RelationshipSelection> {
        match value {
            Value::Null => Ok(RelationshipSelection::Empty),
            Value::Array(items) => {
                let mut out = Vec::with_capacity(items.len());
                for (index, item) in items.iter().enumerate() {
                    out.push(self.enter(index, |d| d.relationship_data(item))?);
                }
                Ok(RelationshipSelection::Many(out))
            }
            Value::Object(_) => Ok(RelationshipSelection::One(self.relationship_data(value)?)),
            other => Err(self.fail(ErrorKind::TypeMismatch {
                expected: "relationship data, an array of relationship data, or null",
                found: describe(other),
            })),
        }
    }

    fn text_align(&self, obj: &Map<String, Value>) -> Decoded<Option<TextAlign>> {
        match obj.get("textAlign") {
            None => Ok(None),
            Some(value) => value.as_str().and_then(TextAlign::parse).map(Some).ok_or_else(|| {
                self.fail_at(
                    "textAlign",
                    ErrorKind::TypeMismatch {
                        expected: "\"center\", \"end\" or absent",
                        found: describe(value),
                    },
                )
            }),
        }
    }

    /// Levels are the integers 1 through 6; `2.0` is the same number as `2`.
    fn heading_level(&self, obj: &Map<String, Value>) -> Decoded<HeadingLevel> {
        let value = self.required(obj, "level")?;
        value
            .as_f64()
            .filter(|n| n.fract() == 0.0 && (1.0..=6.0).contains(n))
            .and_then(|n| HeadingLevel::new(n as u8))
            .ok_or_else(|| {
                self.fail_at(
                    "level",
                    ErrorKind::TypeMismatch {
                        expected: "one of 1, 2, 3, 4, 5, 6",
                        found: describe(value),
                    },
                )
            })
    }

    fn array<'v>(&self, value: &'v Value, expected: &'static str) -> Decoded<&'v Vec<Value>> {
        value.as_array().ok_or_else(|| {
            self.fail(ErrorKind::TypeMismatch {
                expected,
                found: describe(value),
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::error::ErrorKind;
    use crate::model::{Block, ContainerKind, Node, RelationshipSelection, TextAlign};
    use crate::validate::{decode, ValidateOptions};
    use serde_json::{json, Number, Value};

    fn decode_one(block: Value) -> Block {
        decode(&json!([block]), &ValidateOptions::default())
            .unwrap()
            .blocks
            .remove(0)
    }

    fn reject(block: Value) -> crate::error::ValidationError {
        decode(&json!([block]), &ValidateOptions::default()).unwrap_err()
    }

    #[test]
    fn test_every_container_kind() {
        for kind in ContainerKind::ALL {
            let block = decode_one(json!({ "type": kind.as_str(), "children": [{ "text": "" }] }));
            assert_eq!(block.type_name(), kind.as_str());
        }
    }

    #[test]
    fn test_container_rejects_extra_fields() {
        let err = reject(json!({ "type": "blockquote", "textAlign": "center", "children": [] }));
        assert_eq!(err.path.to_string(), "$[0].textAlign");
        assert!(matches!(err.kind, ErrorKind::ExcessProperty { .. }));
    }

    #[test]
    fn test_layout() {
        let block = decode_one(json!({
            "type": "layout",
            "layout": [1, 2.5],
            "children": [
                { "type": "layout-area", "children": [{ "type": "paragraph", "children": [{ "text": "a" }] }] },
                { "type": "layout-area", "children": [{ "type": "paragraph", "children": [{ "text": "b" }] }] }
            ]
        }));
        match block {
            Block::Layout(layout) => {
                assert_eq!(layout.proportions(), vec![1.0, 2.5]);
                assert_eq!(layout.layout[0], Number::from(1u64));
                assert_eq!(layout.children.len(), 2);
            }
            other => panic!("expected layout, got {:?}", other),
        }
    }

    #[test]
    fn test_layout_keeps_large_integers_exact() {
        let value = json!([{ "type": "layout", "layout": [1, 9_007_199_254_740_993u64], "children": [] }]);
        let doc = decode(&value, &ValidateOptions::default()).unwrap();
        assert_eq!(serde_json::to_value(&doc).unwrap(), value);
    }

    #[test]
    fn test_layout_accepts_empty_columns() {
        let block = decode_one(json!({ "type": "layout", "layout": [], "children": [] }));
        assert!(matches!(block, Block::Layout(l) if l.layout.is_empty()));
    }

    #[test]
    fn test_layout_rejects_non_numeric_column() {
        let err = reject(json!({ "type": "layout", "layout": [1, "2"], "children": [] }));
        assert_eq!(err.path.to_string(), "$[0].layout[1]");
    }

    #[test]
    fn test_heading_levels() {
        for level in 1..=6 {
            let block = decode_one(json!({ "type": "heading", "level": level, "children": [] }));
            assert!(matches!(block, Block::Heading(h) if h.level.get() == level));
        }
    }

    #[test]
    fn test_heading_level_out_of_range() {
        for bad in [json!(0), json!(7), json!("2"), json!(1.5), json!(null)] {
            let err = reject(json!({ "type": "heading", "level": bad, "children": [] }));
            assert_eq!(err.path.to_string(), "$[0].level");
        }
    }

    #[test]
    fn test_heading_missing_level() {
        let err = reject(json!({ "type": "heading", "children": [] }));
        assert_eq!(err.kind, ErrorKind::MissingField { field: "level" });
    }

    #[test]
    fn test_text_align() {
        let block = decode_one(json!({ "type": "paragraph", "textAlign": "end", "children": [] }));
        assert!(matches!(block, Block::Paragraph(p) if p.text_align == Some(TextAlign::End)));

        let err = reject(json!({ "type": "paragraph", "textAlign": "start", "children": [] }));
        assert_eq!(
            err.to_string(),
            "textAlign must be \"center\", \"end\" or absent, found \"start\" at $[0].textAlign"
        );
    }

    #[test]
    fn test_block_children_mix_blocks_and_inlines() {
        let block = decode_one(json!({
            "type": "list-item",
            "children": [
                { "type": "paragraph", "children": [{ "text": "a" }] },
                { "text": "b" },
                { "type": "link", "href": "/c", "children": [{ "text": "c" }] }
            ]
        }));
        let kinds: Vec<bool> = block.children().iter().map(Node::is_block).collect();
        assert_eq!(kinds, vec![true, false, false]);
    }

    #[test]
    fn test_component_block() {
        let block = decode_one(json!({
            "type": "component-block",
            "component": "hero",
            "relationships": {
                "author": { "relationship": "author", "data": { "id": "1", "label": "Ada" } },
                "tags": { "relationship": "tags", "data": [{ "id": "t1" }, { "id": "t2" }] },
                "cover": { "relationship": "cover", "data": null, "kind": "one" }
            },
            "props": { "title": "Hello", "count": 3 },
            "children": [
                { "type": "component-inline-prop", "propPath": ["title"], "children": [{ "text": "Hello" }] },
                { "type": "component-block-prop", "propPath": ["items", 0, "body"], "children": [
                    { "type": "paragraph", "children": [{ "text": "body" }] }
                ] }
            ]
        }));

        match block {
            Block::ComponentBlock(cb) => {
                assert_eq!(cb.component, "hero");
                assert_eq!(cb.props["count"], json!(3));
                assert!(matches!(
                    cb.relationships["author"].data,
                    RelationshipSelection::One(_)
                ));
                assert_eq!(cb.relationships["tags"].data.iter().count(), 2);
                assert!(cb.relationships["cover"].data.is_empty());
                assert_eq!(cb.children.len(), 2);
            }
            other => panic!("expected component block, got {:?}", other),
        }
    }

    #[test]
    fn test_component_block_relationship_entry_needs_data() {
        let err = reject(json!({
            "type": "component-block",
            "component": "hero",
            "relationships": { "author": { "relationship": "author" } },
            "props": {},
            "children": []
        }));
        assert_eq!(err.path.to_string(), "$[0].relationships.author");
        assert_eq!(err.kind, ErrorKind::MissingField { field: "data" });
    }

    #[test]
    fn test_component_block_relationship_data_shape() {
        let err = reject(json!({
            "type": "component-block",
            "component": "hero",
            "relationships": { "author": { "relationship": "author", "data": "1" } },
            "props": {},
            "children": []
        }));
        assert_eq!(err.path.to_string(), "$[0].relationships.author.data");

        let err = reject(json!({
            "type": "component-block",
            "component": "hero",
            "relationships": { "tags": { "relationship": "tags", "data": [{ "id": "1" }, { "label": "x" }] } },
            "props": {},
            "children": []
        }));
        assert_eq!(err.path.to_string(), "$[0].relationships.tags.data[1]");
        assert_eq!(err.kind, ErrorKind::MissingField { field: "id" });
    }

    #[test]
    fn test_component_block_props_must_be_object() {
        let err = reject(json!({
            "type": "component-block",
            "component": "hero",
            "relationships": {},
            "props": [],
            "children": []
        }));
        assert_eq!(err.path.to_string(), "$[0].props");
    }

    #[test]
    fn test_prop_path_segments() {
        let err = reject(json!({
            "type": "component-inline-prop",
            "propPath": ["a", true],
            "children": []
        }));
        assert_eq!(
            err.to_string(),
            "propPath[1] must be a string or number, found true at $[0].propPath[1]"
        );

        let block = decode_one(json!({ "type": "component-inline-prop", "propPath": [], "children": [] }));
        assert!(matches!(block, Block::ComponentProp(p) if p.prop_path.is_empty()));
    }

    #[test]
    fn test_unknown_block_type() {
        let err = reject(json!({ "type": "table", "children": [] }));
        assert_eq!(err.path.to_string(), "$[0].type");
        assert!(matches!(err.kind, ErrorKind::UnknownDiscriminant { .. }));
    }
}
