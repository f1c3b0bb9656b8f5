//! References to externally resolved entities.

use serde::Serialize;
use serde_json::{Map, Value};

/// A reference payload pointing at another entity.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RelationshipData {
    /// Referenced entity ID
    pub id: String,

    /// Display label
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    /// Opaque extra fields fetched for the entity
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Map<String, Value>>,
}

impl RelationshipData {
    /// Create a reference by ID alone.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: None,
            data: None,
        }
    }

    /// Set the display label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Set the opaque data.
    pub fn with_data(mut self, data: Map<String, Value>) -> Self {
        self.data = Some(data);
        self
    }
}

/// The value side of a component block relationship.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum RelationshipSelection {
    /// A single selected entity
    One(RelationshipData),
    /// Several selected entities
    Many(Vec<RelationshipData>),
    /// Nothing selected (`null`)
    Empty,
}

impl RelationshipSelection {
    /// Iterate over the selected references.
    pub fn iter(&self) -> std::slice::Iter<'_, RelationshipData> {
        match self {
            RelationshipSelection::One(data) => std::slice::from_ref(data).iter(),
            RelationshipSelection::Many(items) => items.iter(),
            RelationshipSelection::Empty => <&[RelationshipData]>::default().iter(),
        }
    }

    /// Check if nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.iter().len() == 0
    }
}

/// One named relationship on a component block.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RelationshipValue {
    /// Name of the relationship field
    pub relationship: String,

    /// Current selection
    pub data: RelationshipSelection,
}

impl RelationshipValue {
    /// Create a relationship value.
    pub fn new(relationship: impl Into<String>, data: RelationshipSelection) -> Self {
        Self {
            relationship: relationship.into(),
            data,
        }
    }
}
