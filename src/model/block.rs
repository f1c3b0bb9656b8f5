//! Block-level nodes.

use serde::Serialize;
use serde_json::{Map, Number, Value};
use std::collections::BTreeMap;

use super::{Inline, RelationshipValue, Text};

/// Any node that may appear in a block's children.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Node {
    Block(Block),
    Inline(Inline),
}

impl Node {
    /// Get plain text content.
    pub fn plain_text(&self) -> String {
        match self {
            Node::Block(b) => b.plain_text(),
            Node::Inline(i) => i.plain_text(),
        }
    }

    /// Check if this is a block node.
    pub fn is_block(&self) -> bool {
        matches!(self, Node::Block(_))
    }
}

impl From<Block> for Node {
    fn from(block: Block) -> Self {
        Node::Block(block)
    }
}

impl From<Inline> for Node {
    fn from(inline: Inline) -> Self {
        Node::Inline(inline)
    }
}

impl From<Text> for Node {
    fn from(text: Text) -> Self {
        Node::Inline(Inline::Text(text))
    }
}

/// A structural document node.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Block {
    Layout(Layout),
    Container(Container),
    Heading(Heading),
    Paragraph(Paragraph),
    ComponentBlock(ComponentBlock),
    ComponentProp(ComponentProp),
}

impl Block {
    /// The `type` literal of this block.
    pub fn type_name(&self) -> &'static str {
        match self {
            Block::Layout(_) => "layout",
            Block::Container(c) => c.kind.as_str(),
            Block::Heading(_) => "heading",
            Block::Paragraph(_) => "paragraph",
            Block::ComponentBlock(_) => "component-block",
            Block::ComponentProp(p) => p.kind.as_str(),
        }
    }

    /// Get the children.
    pub fn children(&self) -> &[Node] {
        match self {
            Block::Layout(b) => &b.children,
            Block::Container(b) => &b.children,
            Block::Heading(b) => &b.children,
            Block::Paragraph(b) => &b.children,
            Block::ComponentBlock(b) => &b.children,
            Block::ComponentProp(b) => &b.children,
        }
    }

    /// Get plain text content.
    ///
    /// Inline content is concatenated; nested blocks are separated by newlines.
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        let mut pending_inline = false;
        for child in self.children() {
            match child {
                Node::Inline(inline) => {
                    out.push_str(&inline.plain_text());
                    pending_inline = true;
                }
                Node::Block(block) => {
                    if pending_inline || !out.is_empty() {
                        out.push('\n');
                    }
                    out.push_str(&block.plain_text());
                    pending_inline = false;
                }
            }
        }
        out
    }
}

/// Column layout.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename = "layout")]
pub struct Layout {
    /// Column proportions, kept as written
    pub layout: Vec<Number>,

    /// Usually one `layout-area` per column
    pub children: Vec<Node>,
}

impl Layout {
    /// Create a layout with one empty area per column.
    pub fn new(columns: Vec<Number>) -> Self {
        let children = columns
            .iter()
            .map(|_| {
                Node::Block(Block::Container(Container::new(
                    ContainerKind::LayoutArea,
                    vec![Node::Block(Block::Paragraph(Paragraph::new()))],
                )))
            })
            .collect();
        Self {
            layout: columns,
            children,
        }
    }

    /// Column proportions as floats.
    pub fn proportions(&self) -> Vec<f64> {
        self.layout.iter().filter_map(Number::as_f64).collect()
    }
}

/// Kinds of block that carry nothing but children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContainerKind {
    Blockquote,
    LayoutArea,
    Code,
    Divider,
    ListItem,
    OrderedList,
    UnorderedList,
}

impl ContainerKind {
    pub const ALL: [ContainerKind; 7] = [
        ContainerKind::Blockquote,
        ContainerKind::LayoutArea,
        ContainerKind::Code,
        ContainerKind::Divider,
        ContainerKind::ListItem,
        ContainerKind::OrderedList,
        ContainerKind::UnorderedList,
    ];

    /// The `type` literal.
    pub fn as_str(&self) -> &'static str {
        match self {
            ContainerKind::Blockquote => "blockquote",
            ContainerKind::LayoutArea => "layout-area",
            ContainerKind::Code => "code",
            ContainerKind::Divider => "divider",
            ContainerKind::ListItem => "list-item",
            ContainerKind::OrderedList => "ordered-list",
            ContainerKind::UnorderedList => "unordered-list",
        }
    }

    /// Parse a `type` literal.
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|k| k.as_str() == s)
    }
}

/// A block with no fields beyond its type and children.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Container {
    #[serde(rename = "type")]
    pub kind: ContainerKind,

    pub children: Vec<Node>,
}

impl Container {
    /// Create a container block.
    pub fn new(kind: ContainerKind, children: Vec<Node>) -> Self {
        Self { kind, children }
    }

    /// Create a divider (which holds a single empty text leaf).
    pub fn divider() -> Self {
        Self::new(ContainerKind::Divider, vec![Node::from(Text::new(""))])
    }
}

/// Heading level, 1 through 6.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct HeadingLevel(u8);

impl HeadingLevel {
    /// Create a level, or `None` if outside 1..=6.
    pub fn new(level: u8) -> Option<Self> {
        (1..=6).contains(&level).then_some(Self(level))
    }

    /// Get the numeric level.
    pub fn get(&self) -> u8 {
        self.0
    }
}

/// Non-default text alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    Center,
    End,
}

impl TextAlign {
    /// Parse an alignment literal.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "center" => Some(TextAlign::Center),
            "end" => Some(TextAlign::End),
            _ => None,
        }
    }
}

/// A heading.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename = "heading")]
pub struct Heading {
    pub level: HeadingLevel,

    #[serde(rename = "textAlign", skip_serializing_if = "Option::is_none")]
    pub text_align: Option<TextAlign>,

    pub children: Vec<Node>,
}

impl Heading {
    /// Create a heading holding a single text leaf.
    pub fn new(level: HeadingLevel, text: impl Into<String>) -> Self {
        Self {
            level,
            text_align: None,
            children: vec![Node::from(Text::new(text))],
        }
    }
}

/// A paragraph.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename = "paragraph")]
pub struct Paragraph {
    #[serde(rename = "textAlign", skip_serializing_if = "Option::is_none")]
    pub text_align: Option<TextAlign>,

    pub children: Vec<Node>,
}

impl Paragraph {
    /// Create an empty paragraph (a single empty text leaf).
    pub fn new() -> Self {
        Self::with_text("")
    }

    /// Create a paragraph with plain text.
    pub fn with_text(text: impl Into<String>) -> Self {
        Self::with_inlines(vec![Inline::Text(Text::new(text))])
    }

    /// Create a paragraph from inline content.
    pub fn with_inlines(inlines: Vec<Inline>) -> Self {
        Self {
            text_align: None,
            children: inlines.into_iter().map(Node::Inline).collect(),
        }
    }

    /// Set the alignment.
    pub fn aligned(mut self, align: TextAlign) -> Self {
        self.text_align = Some(align);
        self
    }

    /// Get the text of the inline children.
    pub fn inline_text(&self) -> String {
        self.children
            .iter()
            .filter_map(|n| match n {
                Node::Inline(i) => Some(i.plain_text()),
                Node::Block(_) => None,
            })
            .collect()
    }
}

impl Default for Paragraph {
    fn default() -> Self {
        Self::new()
    }
}

/// An embedded custom component.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename = "component-block")]
pub struct ComponentBlock {
    /// Component name
    pub component: String,

    /// Relationship fields by prop name
    pub relationships: BTreeMap<String, RelationshipValue>,

    /// Opaque component props
    pub props: Map<String, Value>,

    /// Slots for child-field props
    pub children: Vec<Node>,
}

impl ComponentBlock {
    /// Create a component block with no props.
    pub fn new(component: impl Into<String>) -> Self {
        Self {
            component: component.into(),
            relationships: BTreeMap::new(),
            props: Map::new(),
            children: vec![Node::Block(Block::ComponentProp(ComponentProp::new(
                ComponentPropKind::ComponentInlineProp,
                Vec::new(),
            )))],
        }
    }
}

/// Kinds of component child slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ComponentPropKind {
    ComponentInlineProp,
    ComponentBlockProp,
}

impl ComponentPropKind {
    /// The `type` literal.
    pub fn as_str(&self) -> &'static str {
        match self {
            ComponentPropKind::ComponentInlineProp => "component-inline-prop",
            ComponentPropKind::ComponentBlockProp => "component-block-prop",
        }
    }

    /// Parse a `type` literal.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "component-inline-prop" => Some(ComponentPropKind::ComponentInlineProp),
            "component-block-prop" => Some(ComponentPropKind::ComponentBlockProp),
            _ => None,
        }
    }
}

/// One step of a prop path.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PropPathSegment {
    Key(String),
    Index(Number),
}

impl From<&str> for PropPathSegment {
    fn from(key: &str) -> Self {
        PropPathSegment::Key(key.to_string())
    }
}

impl From<u64> for PropPathSegment {
    fn from(index: u64) -> Self {
        PropPathSegment::Index(index.into())
    }
}

/// A child slot of a component block.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComponentProp {
    #[serde(rename = "type")]
    pub kind: ComponentPropKind,

    /// Location of the prop inside the component's props
    #[serde(rename = "propPath")]
    pub prop_path: Vec<PropPathSegment>,

    pub children: Vec<Node>,
}

impl ComponentProp {
    /// Create a slot holding a single empty text leaf.
    pub fn new(kind: ComponentPropKind, prop_path: Vec<PropPathSegment>) -> Self {
        Self {
            kind,
            prop_path,
            children: vec![Node::from(Text::new(""))],
        }
    }
}
