//! # docshape
//!
//! Structural validation for rich-text document trees.
//!
//! A document is a JSON array of block nodes. Blocks hold children that are
//! blocks or inlines; links and relationships hold inline children only; text
//! leaves carry a string and a set of boolean marks. This crate checks that an
//! arbitrary value has exactly that shape, with no extra fields on any node,
//! before it is handed to normalization or storage.
//!
//! ## Quick Start
//!
//! ```
//! use serde_json::json;
//!
//! let value = json!([
//!     { "type": "paragraph", "children": [{ "text": "hi", "bold": true }] }
//! ]);
//! docshape::validate_document(&value)?;
//!
//! let bad = json!([
//!     { "type": "paragraph", "children": [{ "text": "hi", "bold": false }] }
//! ]);
//! let err = docshape::validate_document(&bad).unwrap_err();
//! assert_eq!(err.path.to_string(), "$[0].children[0].bold");
//! # Ok::<(), docshape::ValidationError>(())
//! ```
//!
//! ## Features
//!
//! - **Fail-fast**: the first defect in document order is reported, with its path
//! - **Closed objects**: unknown keys are rejected on every node variant
//! - **Typed output**: [`decode_document`] returns the validated tree as [`Document`]
//! - **Round-trip**: every [`Document`] built in code serializes to a valid value

pub mod error;
pub mod model;
pub mod path;
pub mod validate;

// Re-export commonly used types
pub use error::{Error, ErrorKind, NodeContext, Result, ValidationError};
pub use model::{
    Block, ComponentBlock, ComponentProp, ComponentPropKind, Container, ContainerKind, Document,
    Heading, HeadingLevel, Inline, Layout, Link, Mark, Marks, Node, NodeStats, Paragraph,
    PropPathSegment, Relationship, RelationshipData, RelationshipSelection, RelationshipValue,
    Text, TextAlign,
};
pub use path::{Path, Segment};
pub use validate::ValidateOptions;

use serde_json::Value;
use std::io::Read;

/// Validate a value as a document.
///
/// Returns normally if the value is a structurally valid document, otherwise
/// the first defect found in document order.
///
/// # Example
///
/// ```
/// use serde_json::json;
///
/// let err = docshape::validate_document(&json!([
///     { "type": "heading", "level": 9, "children": [] }
/// ]))
/// .unwrap_err();
/// assert_eq!(err.path.to_string(), "$[0].level");
/// ```
pub fn validate_document(value: &Value) -> std::result::Result<(), ValidationError> {
    decode_document(value).map(|_| ())
}

/// Validate a value as a document and return the typed tree.
///
/// # Example
///
/// ```
/// use docshape::{decode_document, Block};
/// use serde_json::json;
///
/// let doc = decode_document(&json!([
///     { "type": "paragraph", "children": [{ "text": "Hello" }] }
/// ]))?;
/// assert!(matches!(doc.blocks[0], Block::Paragraph(_)));
/// assert_eq!(doc.plain_text(), "Hello");
/// # Ok::<(), docshape::ValidationError>(())
/// ```
pub fn decode_document(value: &Value) -> std::result::Result<Document, ValidationError> {
    validate::decode(value, &ValidateOptions::default())
}

/// Parse JSON text and validate it as a document.
///
/// # Example
///
/// ```
/// use docshape::{validate_str, Error};
///
/// assert!(validate_str("[]").is_ok());
/// assert!(matches!(validate_str("[").unwrap_err(), Error::Json(_)));
/// assert!(matches!(validate_str("{}").unwrap_err(), Error::Validation(_)));
/// ```
pub fn validate_str(json: &str) -> Result<()> {
    Validator::new().validate_str(json)
}

/// Read JSON from a reader and validate it as a document.
pub fn validate_reader<R: Read>(reader: R) -> Result<()> {
    Validator::new().validate_reader(reader)
}

/// Read a JSON file and validate it as a document.
///
/// # Example
///
/// ```no_run
/// use docshape::validate_file;
///
/// validate_file("document.json")?;
/// # Ok::<(), docshape::Error>(())
/// ```
pub fn validate_file<P: AsRef<std::path::Path>>(path: P) -> Result<()> {
    Validator::new().validate_file(path)
}

/// Builder for validating documents with custom options.
///
/// # Example
///
/// ```
/// use docshape::Validator;
/// use serde_json::json;
///
/// let validator = Validator::new().with_max_depth(2);
/// let nested = json!([
///     { "type": "blockquote", "children": [
///         { "type": "paragraph", "children": [{ "text": "too deep" }] }
///     ] }
/// ]);
/// assert!(validator.validate(&nested).is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Validator {
    options: ValidateOptions,
}

impl Validator {
    /// Create a new validator with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a validator from options.
    pub fn with_options(options: ValidateOptions) -> Self {
        Self { options }
    }

    /// Reject documents nested deeper than `depth`.
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.options = self.options.with_max_depth(depth);
        self
    }

    /// Get the options in use.
    pub fn options(&self) -> &ValidateOptions {
        &self.options
    }

    /// Validate a value as a document.
    pub fn validate(&self, value: &Value) -> std::result::Result<(), ValidationError> {
        self.decode(value).map(|_| ())
    }

    /// Validate a value and return the typed tree.
    pub fn decode(&self, value: &Value) -> std::result::Result<Document, ValidationError> {
        validate::decode(value, &self.options)
    }

    /// Parse JSON text and validate it.
    pub fn validate_str(&self, json: &str) -> Result<()> {
        let value: Value = serde_json::from_str(json)?;
        Ok(self.validate(&value)?)
    }

    /// Parse JSON text and return the typed tree.
    pub fn decode_str(&self, json: &str) -> Result<Document> {
        let value: Value = serde_json::from_str(json)?;
        Ok(self.decode(&value)?)
    }

    /// Read JSON from a reader and validate it.
    pub fn validate_reader<R: Read>(&self, reader: R) -> Result<()> {
        let value: Value = serde_json::from_reader(reader)?;
        Ok(self.validate(&value)?)
    }

    /// Read a JSON file and validate it.
    pub fn validate_file<P: AsRef<std::path::Path>>(&self, path: P) -> Result<()> {
        self.decode_file(path).map(|_| ())
    }

    /// Read a JSON file and return the typed tree.
    pub fn decode_file<P: AsRef<std::path::Path>>(&self, path: P) -> Result<Document> {
        let path = path.as_ref();
        log::debug!("reading document from {}", path.display());
        let file = std::fs::File::open(path)?;
        let value: Value = serde_json::from_reader(std::io::BufReader::new(file))?;
        Ok(self.decode(&value)?)
    }
}
