//! Visited sets for graph traversals.
//!
//! `VisitedSet` packs one bit per vertex into `u64` words. Traversals are
//! single-threaded, so plain words replace atomics.

const WORD_BITS: usize = u64::BITS as usize;

/// A dense, word-packed visited set sized to a graph's vertex count.
pub(crate) struct VisitedSet {
    words: Vec<u64>,
    len: usize,
}

impl VisitedSet {
    #[inline]
    pub(crate) fn new(len: usize) -> Self {
        Self {
            words: vec![0; len.div_ceil(WORD_BITS)],
            len,
        }
    }

    #[inline(always)]
    pub(crate) fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` iff `node` was not yet visited, and marks it visited.
    ///
    /// # Panics
    /// Panics if `node >= self.len()`.
    #[inline(always)]
    pub(crate) fn try_visit(&mut self, node: usize) -> bool {
        assert!(node < self.len, "node {node} out of bounds");
        let word = &mut self.words[node / WORD_BITS];
        let mask = 1u64 << (node % WORD_BITS);
        let fresh = *word & mask == 0;
        *word |= mask;
        fresh
    }

    #[inline(always)]
    pub(crate) fn is_visited(&self, node: usize) -> bool {
        node < self.len && self.words[node / WORD_BITS] & (1u64 << (node % WORD_BITS)) != 0
    }

    /// Returns the first unvisited index at or after `from`.
    pub(crate) fn next_unvisited(&self, from: usize) -> Option<usize> {
        (from..self.len).find(|&i| !self.is_visited(i))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn try_visit_marks_once() {
        let mut set = VisitedSet::new(130);
        assert_eq!(set.len(), 130);
        assert!(set.try_visit(0));
        assert!(!set.try_visit(0));
        assert!(set.try_visit(129));
        assert!(set.is_visited(129));
        assert!(!set.is_visited(64));
        assert!(!set.is_visited(500));
    }

    #[test]
    fn next_unvisited_skips_marked() {
        let mut set = VisitedSet::new(4);
        set.try_visit(0);
        set.try_visit(1);
        set.try_visit(3);
        assert_eq!(set.next_unvisited(0), Some(2));
        assert_eq!(set.next_unvisited(3), None);
    }
}
