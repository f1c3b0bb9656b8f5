//! Error types for docshape library.

use std::fmt;
use std::io;
use thiserror::Error;

use crate::path::{Path, Segment};

/// Result type alias for docshape operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while checking a document.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading input.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The input text is not JSON.
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    /// The input is JSON but not a structurally valid document.
    #[error("Invalid document: {0}")]
    Validation(#[from] ValidationError),
}

impl Error {
    /// Get the structural failure, if this is one.
    pub fn as_validation(&self) -> Option<&ValidationError> {
        match self {
            Error::Validation(e) => Some(e),
            _ => None,
        }
    }
}

/// Where in the grammar a node was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeContext {
    /// Top level of a document: blocks only
    Document,
    /// Children of a block: blocks or inlines
    BlockChildren,
    /// Children of a link or relationship: inlines only
    InlineChildren,
}

impl NodeContext {
    fn permitted(&self) -> &'static str {
        match self {
            NodeContext::Document => "a block node",
            NodeContext::BlockChildren => "a block or inline node",
            NodeContext::InlineChildren => "an inline node",
        }
    }
}

impl fmt::Display for NodeContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            NodeContext::Document => "document top level",
            NodeContext::BlockChildren => "block children",
            NodeContext::InlineChildren => "inline children",
        })
    }
}

/// The kind of structural defect found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// An object carries a key its variant does not allow.
    ExcessProperty { key: String },

    /// A value does not match its expected primitive, literal or shape.
    TypeMismatch {
        expected: &'static str,
        found: String,
    },

    /// A `type` field matches none of the literals known in this position.
    UnknownDiscriminant { found: String, context: NodeContext },

    /// A known node sits where its category is not permitted.
    MisplacedNode { node: String, context: NodeContext },

    /// A required key is absent.
    MissingField { field: &'static str },

    /// A children list (or the document root) is not a sequence.
    NotASequence { found: String },

    /// Nesting went past the configured limit.
    DepthExceeded { limit: usize },
}

/// A single structural defect and its location.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{} at {path}", self.message())]
pub struct ValidationError {
    /// Path from the document root to the offending value
    pub path: Path,

    /// What went wrong
    pub kind: ErrorKind,
}

impl ValidationError {
    /// Create a new validation error.
    pub fn new(path: Path, kind: ErrorKind) -> Self {
        Self { path, kind }
    }

    /// Human-readable message without the location.
    pub fn message(&self) -> String {
        let segments = self.path.segments();
        let subject = match segments {
            [] => "document".to_string(),
            [.., Segment::Key(k)] => k.clone(),
            [.., Segment::Key(k), Segment::Index(i)] => format!("{}[{}]", k, i),
            [.., Segment::Index(i)] => format!("document[{}]", i),
        };

        match &self.kind {
            ErrorKind::ExcessProperty { key } => format!("excess property `{}`", key),
            ErrorKind::TypeMismatch { expected, found } => {
                format!("{} must be {}, found {}", subject, expected, found)
            }
            ErrorKind::UnknownDiscriminant { found, context } => format!(
                "unknown node type {} in {}, expected {}",
                found,
                context,
                context.permitted()
            ),
            ErrorKind::MisplacedNode { node, context } => format!(
                "{} node is not permitted in {}, expected {}",
                node,
                context,
                context.permitted()
            ),
            ErrorKind::MissingField { field } => format!("missing required field `{}`", field),
            ErrorKind::NotASequence { found } => {
                format!("{} must be an array, found {}", subject, found)
            }
            ErrorKind::DepthExceeded { limit } => {
                format!("nesting exceeds the maximum depth of {}", limit)
            }
        }
    }
}
