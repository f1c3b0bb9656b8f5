//! Typed document tree.
//!
//! These types are what a successful validation produces. Each one serializes
//! back to exactly the JSON shape the validator accepts, so a tree built here
//! always passes validation.

mod block;
mod document;
mod inline;
mod relationship;
mod text;

pub use block::{
    Block, ComponentBlock, ComponentProp, ComponentPropKind, Container, ContainerKind, Heading,
    HeadingLevel, Layout, Node, Paragraph, PropPathSegment, TextAlign,
};
pub use document::{Document, NodeStats};
pub use inline::{Inline, Link, Relationship};
pub use relationship::{RelationshipData, RelationshipSelection, RelationshipValue};
pub use text::{Mark, Marks, Text};
