//! Children lists and per-element dispatch.

use serde_json::{Map, Value};

use super::block::is_block_type;
use super::inline::is_inline_type;
use super::{describe, Decoded, Decoder};
use crate::error::{ErrorKind, NodeContext, ValidationError};
use crate::model::{Block, Inline, Node};

/// What an element claims to be before its own fields are checked.
enum NodeTag<'v> {
    Text,
    Block(&'v str),
    Inline(&'v str),
}

impl Decoder<'_> {
    /// Decode an array, one node level deeper per element.
    pub(super) fn sequence<T>(
        &mut self,
        value: &Value,
        mut element: impl FnMut(&mut Self, &Value) -> Decoded<T>,
    ) -> Decoded<Vec<T>> {
        let items = value.as_array().ok_or_else(|| {
            self.fail(ErrorKind::NotASequence {
                found: describe(value),
            })
        })?;

        let mut out = Vec::with_capacity(items.len());
        for (index, item) in items.iter().enumerate() {
            out.push(self.enter(index, |d| d.nested(|d| element(d, item)))?);
        }
        Ok(out)
    }

    /// Decode the `children` of a block: blocks or inlines, mixed.
    pub(super) fn block_children(&mut self, obj: &Map<String, Value>) -> Decoded<Vec<Node>> {
        let value = self.required(obj, "children")?;
        self.enter("children", |d| d.sequence(value, |d, item| d.node(item)))
    }

    /// Decode the `children` of a link or relationship: inlines only.
    pub(super) fn inline_children(&mut self, obj: &Map<String, Value>) -> Decoded<Vec<Inline>> {
        let value = self.required(obj, "children")?;
        self.enter("children", |d| d.sequence(value, |d, item| d.inline(item)))
    }

    /// Decode a top-level element, which must be a block.
    pub(super) fn top_level(&mut self, value: &Value) -> Decoded<Block> {
        let obj = self.object(value)?;
        match self.classify(obj, NodeContext::Document)? {
            NodeTag::Block(tag) => self.block(obj, tag),
            NodeTag::Text => Err(self.misplaced("text", NodeContext::Document)),
            NodeTag::Inline(tag) => Err(self.misplaced(tag, NodeContext::Document)),
        }
    }

    fn node(&mut self, value: &Value) -> Decoded<Node> {
        let obj = self.object(value)?;
        match self.classify(obj, NodeContext::BlockChildren)? {
            NodeTag::Text => Ok(Node::Inline(Inline::Text(self.text(obj)?))),
            NodeTag::Block(tag) => Ok(Node::Block(self.block(obj, tag)?)),
            NodeTag::Inline(tag) => Ok(Node::Inline(self.inline_container(obj, tag)?)),
        }
    }

    fn inline(&mut self, value: &Value) -> Decoded<Inline> {
        let obj = self.object(value)?;
        match self.classify(obj, NodeContext::InlineChildren)? {
            NodeTag::Text => Ok(Inline::Text(self.text(obj)?)),
            NodeTag::Inline(tag) => self.inline_container(obj, tag),
            NodeTag::Block(tag) => Err(self.misplaced(tag, NodeContext::InlineChildren)),
        }
    }

    /// Leaves are recognised by a `text` key; everything else by `type`.
    fn classify<'v>(
        &self,
        obj: &'v Map<String, Value>,
        context: NodeContext,
    ) -> Decoded<NodeTag<'v>> {
        if obj.contains_key("text") {
            return Ok(NodeTag::Text);
        }

        let value = self.required(obj, "type")?;
        let tag = value.as_str().ok_or_else(|| {
            self.fail_at(
                "type",
                ErrorKind::TypeMismatch {
                    expected: "a node type name",
                    found: describe(value),
                },
            )
        })?;

        if is_block_type(tag) {
            Ok(NodeTag::Block(tag))
        } else if is_inline_type(tag) {
            Ok(NodeTag::Inline(tag))
        } else {
            Err(self.fail_at(
                "type",
                ErrorKind::UnknownDiscriminant {
                    found: describe(value),
                    context,
                },
            ))
        }
    }

    fn misplaced(&self, node: &str, context: NodeContext) -> ValidationError {
        self.fail(ErrorKind::MisplacedNode {
            node: node.to_string(),
            context,
        })
    }
}
