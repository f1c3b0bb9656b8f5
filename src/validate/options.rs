//! Validation options and configuration.

/// Options for validating documents.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidateOptions {
    /// Deepest node nesting accepted (top-level blocks are depth 1).
    /// `None` accepts any depth.
    pub max_depth: Option<usize>,
}

impl ValidateOptions {
    /// Create new validate options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject documents nested deeper than `depth`.
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Some(depth);
        self
    }

    /// Accept any nesting depth.
    pub fn unlimited_depth(mut self) -> Self {
        self.max_depth = None;
        self
    }
}
