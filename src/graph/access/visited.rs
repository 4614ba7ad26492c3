//! Dense visited sets for graph traversals.
//!
//! Traversals over a frozen [`Digraph`](crate::graph::Digraph) allocate one of
//! these per run, so concurrent queries never share visited state.

const WORD_BITS: usize = u64::BITS as usize;

/// A word-packed visited set sized to a fixed vertex count.
#[derive(Clone, Debug)]
pub(crate) struct VisitedSet {
    words: Vec<u64>,
    bits: usize,
}

impl VisitedSet {
    #[inline]
    pub(crate) fn new(bits: usize) -> Self {
        Self {
            words: vec![0; bits.div_ceil(WORD_BITS)],
            bits,
        }
    }

    /// Returns `true` iff this call observed the node as not-yet-visited and marks it visited.
    #[inline(always)]
    pub(crate) fn try_visit(&mut self, node: usize) -> bool {
        debug_assert!(node < self.bits, "node {node} out of bounds");
        let word = &mut self.words[node / WORD_BITS];
        let mask = 1u64 << (node % WORD_BITS);
        let fresh = *word & mask == 0;
        *word |= mask;
        fresh
    }

    /// Number of visited nodes.
    pub(crate) fn count(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::VisitedSet;

    #[test]
    fn try_visit_reports_first_visit_only() {
        let mut visited = VisitedSet::new(130);
        assert!(visited.try_visit(0));
        assert!(!visited.try_visit(0));
        assert!(visited.try_visit(64));
        assert!(visited.try_visit(129));
        assert!(!visited.try_visit(129));
        assert_eq!(visited.count(), 3);
    }
}
