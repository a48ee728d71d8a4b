//! Dense visited set for graph traversals.
//!
//! Each traversal call owns one `VisitedSet`, sized to the graph's vertex
//! count at entry and dropped when the call returns. Nothing outside the
//! traversal can observe it.

const WORD_BITS: usize = u64::BITS as usize;

/// A word-packed bit set over vertex ids `0..len`.
pub(crate) struct VisitedSet {
    words: Vec<u64>,
    len: usize,
}

impl VisitedSet {
    /// Creates a set for `len` vertices, all unvisited.
    pub(crate) fn new(len: usize) -> Self {
        Self {
            words: vec![0; len.div_ceil(WORD_BITS)],
            len,
        }
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` iff `node` was not yet visited, marking it visited.
    #[inline]
    pub(crate) fn try_visit(&mut self, node: usize) -> bool {
        debug_assert!(node < self.len, "vertex {node} out of bounds");
        let mask = 1u64 << (node % WORD_BITS);
        let word = &mut self.words[node / WORD_BITS];
        let fresh = *word & mask == 0;
        *word |= mask;
        fresh
    }

    #[inline]
    pub(crate) fn is_visited(&self, node: usize) -> bool {
        debug_assert!(node < self.len, "vertex {node} out of bounds");
        self.words[node / WORD_BITS] & (1u64 << (node % WORD_BITS)) != 0
    }
}
