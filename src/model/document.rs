//! Document-level types.

use serde::Serialize;

use super::{Block, Inline, Node};

/// A validated document: an ordered list of top-level blocks.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Document {
    /// Top-level blocks in reading order
    pub blocks: Vec<Block>,
}

impl Document {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a document from blocks.
    pub fn from_blocks(blocks: Vec<Block>) -> Self {
        Self { blocks }
    }

    /// Add a block at the end.
    pub fn add_block(&mut self, block: Block) {
        self.blocks.push(block);
    }

    /// Check if the document has no blocks.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Get plain text content, one line per top-level block.
    pub fn plain_text(&self) -> String {
        self.blocks
            .iter()
            .map(Block::plain_text)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Count nodes by category.
    pub fn stats(&self) -> NodeStats {
        let mut stats = NodeStats::default();
        for block in &self.blocks {
            stats.count_block(block);
        }
        stats
    }

    /// Total number of nodes in the tree.
    pub fn node_count(&self) -> usize {
        self.stats().total()
    }
}

/// Node counts for a document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct NodeStats {
    /// Block nodes
    pub blocks: usize,
    /// Links and relationships
    pub inline_containers: usize,
    /// Text leaves
    pub texts: usize,
    /// Deepest nesting level (top-level blocks are depth 1)
    pub max_depth: usize,
}

impl NodeStats {
    /// Total number of nodes.
    pub fn total(&self) -> usize {
        self.blocks + self.inline_containers + self.texts
    }

    fn count_block(&mut self, block: &Block) {
        let mut stack: Vec<(&Node, usize)> = Vec::new();
        self.blocks += 1;
        self.max_depth = self.max_depth.max(1);
        stack.extend(block.children().iter().map(|c| (c, 2)));

        while let Some((node, depth)) = stack.pop() {
            self.max_depth = self.max_depth.max(depth);
            match node {
                Node::Block(b) => {
                    self.blocks += 1;
                    stack.extend(b.children().iter().map(|c| (c, depth + 1)));
                }
                Node::Inline(i) => self.count_inline(i, depth),
            }
        }
    }

    fn count_inline(&mut self, inline: &Inline, depth: usize) {
        self.max_depth = self.max_depth.max(depth);
        match inline {
            Inline::Text(_) => self.texts += 1,
            _ => {
                self.inline_containers += 1;
                for child in inline.children() {
                    self.count_inline(child, depth + 1);
                }
            }
        }
    }
}
