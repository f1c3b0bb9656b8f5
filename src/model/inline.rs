//! Inline nodes: text flow content.

use serde::Serialize;

use super::{RelationshipData, Text};

/// A node inside text flow.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Inline {
    /// A text leaf
    Text(Text),
    /// A hyperlink around inline content
    Link(Link),
    /// An inline reference to another entity
    Relationship(Relationship),
}

impl Inline {
    /// Get plain text content.
    pub fn plain_text(&self) -> String {
        match self {
            Inline::Text(t) => t.text.clone(),
            Inline::Link(l) => inline_text(&l.children),
            Inline::Relationship(r) => inline_text(&r.children),
        }
    }

    /// Get the children, if this is a container.
    pub fn children(&self) -> &[Inline] {
        match self {
            Inline::Text(_) => &[],
            Inline::Link(l) => &l.children,
            Inline::Relationship(r) => &r.children,
        }
    }
}

impl From<Text> for Inline {
    fn from(text: Text) -> Self {
        Inline::Text(text)
    }
}

impl From<Link> for Inline {
    fn from(link: Link) -> Self {
        Inline::Link(link)
    }
}

impl From<Relationship> for Inline {
    fn from(relationship: Relationship) -> Self {
        Inline::Relationship(relationship)
    }
}

fn inline_text(children: &[Inline]) -> String {
    children.iter().map(Inline::plain_text).collect()
}

/// A hyperlink.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename = "link")]
pub struct Link {
    /// Link target
    pub href: String,

    /// Linked content
    pub children: Vec<Inline>,
}

impl Link {
    /// Create a link around a single text leaf.
    pub fn new(href: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            children: vec![Inline::Text(Text::new(text))],
        }
    }
}

/// An inline mention of another entity.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename = "relationship")]
pub struct Relationship {
    /// Name of the relationship field this mention belongs to
    pub relationship: String,

    /// The referenced entity, once chosen
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<RelationshipData>,

    /// Content shown for the mention
    pub children: Vec<Inline>,
}

impl Relationship {
    /// Create an unresolved mention.
    pub fn new(relationship: impl Into<String>) -> Self {
        Self {
            relationship: relationship.into(),
            data: None,
            children: vec![Inline::Text(Text::new(""))],
        }
    }

    /// Attach the referenced entity.
    pub fn with_data(mut self, data: RelationshipData) -> Self {
        self.data = Some(data);
        self
    }
}
