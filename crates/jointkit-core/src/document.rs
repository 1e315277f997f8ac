//! The host G-code document model.

use serde::{Deserialize, Serialize};

use crate::toolpath::Block;

/// Ordered list of named blocks with an optional active selection.
///
/// Block 0 is conventionally the host's program header, so generated blocks
/// land at the active block when one is selected and just after the header
/// otherwise.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GcodeDocument {
    blocks: Vec<Block>,
    active: Option<usize>,
}

impl GcodeDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Appends a block at the end, leaving the selection alone.
    pub fn push_block(&mut self, block: Block) {
        self.blocks.push(block);
    }

    /// Selects a block; out-of-range indices clear the selection.
    pub fn set_active(&mut self, index: usize) {
        self.active = (index < self.blocks.len()).then_some(index);
    }

    pub fn active_block(&self) -> Option<usize> {
        self.active
    }

    /// Where generated blocks are inserted: the active block, or index 1
    /// when nothing is selected, clamped to the list length.
    pub fn insertion_index(&self) -> usize {
        self.active.unwrap_or(1).min(self.blocks.len())
    }

    /// Inserts the blocks at the insertion point, preserving their order,
    /// and returns the index of the first inserted block. Ownership of the
    /// blocks transfers to the document.
    pub fn insert_blocks(&mut self, blocks: Vec<Block>) -> usize {
        let at = self.insertion_index();
        for (offset, block) in blocks.into_iter().enumerate() {
            self.blocks.insert(at + offset, block);
        }
        at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named(name: &str) -> Block {
        Block::new(name)
    }

    #[test]
    fn test_insert_after_header_when_nothing_active() {
        let mut doc = GcodeDocument::new();
        doc.push_block(named("header"));
        doc.push_block(named("existing"));

        let at = doc.insert_blocks(vec![named("a"), named("b")]);
        assert_eq!(at, 1);
        let names: Vec<&str> = doc.blocks().iter().map(|b| b.name.as_str()).collect();
        assert_eq!(names, ["header", "a", "b", "existing"]);
    }

    #[test]
    fn test_insert_at_active_block() {
        let mut doc = GcodeDocument::new();
        doc.push_block(named("header"));
        doc.push_block(named("first"));
        doc.push_block(named("second"));
        doc.set_active(2);

        let at = doc.insert_blocks(vec![named("new")]);
        assert_eq!(at, 2);
        let names: Vec<&str> = doc.blocks().iter().map(|b| b.name.as_str()).collect();
        assert_eq!(names, ["header", "first", "new", "second"]);
    }

    #[test]
    fn test_insert_into_empty_document_clamps() {
        let mut doc = GcodeDocument::new();
        let at = doc.insert_blocks(vec![named("only")]);
        assert_eq!(at, 0);
        assert_eq!(doc.blocks().len(), 1);
    }

    #[test]
    fn test_set_active_out_of_range_clears() {
        let mut doc = GcodeDocument::new();
        doc.push_block(named("header"));
        doc.set_active(0);
        assert_eq!(doc.active_block(), Some(0));
        doc.set_active(5);
        assert_eq!(doc.active_block(), None);
    }
}
