//! Frequency-ordered working set used while the tree is being built.
//!
//! The frontier is a plain vector kept sorted ascending by frequency. The two
//! lightest nodes are always at the front, and a merged node is placed with a
//! binary search followed by an element shift. With at most 256 byte symbols
//! the quadratic worst case is cheaper than maintaining a heap, and the
//! placement rule below fixes the tie-break so tree shapes are reproducible.

use super::tree::HuffmanNode;

/// Nodes not yet merged into the tree, ascending by frequency.
#[derive(Debug, Clone)]
pub struct Frontier<S> {
    nodes: Vec<HuffmanNode<S>>,
}

impl<S> Frontier<S> {
    /// Wrap nodes that are already sorted ascending by frequency.
    pub fn from_sorted(nodes: Vec<HuffmanNode<S>>) -> Self {
        let frontier = Frontier { nodes };
        debug_assert!(frontier.is_sorted());
        frontier
    }

    /// Number of nodes not yet merged.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if no nodes remain.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Frequencies in frontier order.
    pub fn frequencies(&self) -> impl Iterator<Item = usize> + '_ {
        self.nodes.iter().map(HuffmanNode::freq)
    }

    /// Returns true if the nodes are ascending by frequency.
    pub fn is_sorted(&self) -> bool {
        self.nodes.windows(2).all(|w| w[0].freq() <= w[1].freq())
    }

    /// Insert `node` immediately before the first node whose frequency is
    /// greater than or equal to its own, or at the end if there is none.
    ///
    /// Returns the index the node was placed at.
    pub fn insert(&mut self, node: HuffmanNode<S>) -> usize {
        let freq = node.freq();
        let index = self.nodes.partition_point(|n| n.freq() < freq);
        self.nodes.insert(index, node);
        index
    }

    /// Remove the two lightest nodes, lightest first.
    ///
    /// Returns `None` and leaves the frontier untouched when fewer than two
    /// nodes remain.
    pub fn pop_two(&mut self) -> Option<(HuffmanNode<S>, HuffmanNode<S>)> {
        if self.nodes.len() < 2 {
            return None;
        }
        let second = self.nodes.remove(1);
        let first = self.nodes.remove(0);
        Some((first, second))
    }

    /// The single remaining node, if exactly one is left.
    pub fn into_root(mut self) -> Option<HuffmanNode<S>> {
        if self.nodes.len() == 1 {
            self.nodes.pop()
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    fn leaf(symbol: u8, freq: usize) -> HuffmanNode<u8> {
        HuffmanNode::Leaf { symbol, freq }
    }

    #[test]
    fn test_insert_before_first_equal() {
        let mut frontier =
            Frontier::from_sorted(vec![leaf(0, 1), leaf(1, 3), leaf(2, 3), leaf(3, 5)]);
        let index = frontier.insert(leaf(9, 3));
        assert_eq!(index, 1);
        assert_eq!(frontier.frequencies().collect::<Vec<_>>(), vec![1, 3, 3, 3, 5]);
    }

    #[test]
    fn test_insert_at_end() {
        let mut frontier = Frontier::from_sorted(vec![leaf(0, 1), leaf(1, 2)]);
        assert_eq!(frontier.insert(leaf(2, 10)), 2);
        let mut empty: Frontier<u8> = Frontier::from_sorted(Vec::new());
        assert_eq!(empty.insert(leaf(0, 4)), 0);
    }

    #[test]
    fn test_stays_sorted_after_random_inserts() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let mut frontier: Frontier<u8> = Frontier::from_sorted(Vec::new());
        for i in 0..200 {
            frontier.insert(leaf(i as u8, rng.gen_range(0..50)));
            assert!(frontier.is_sorted());
        }
        assert_eq!(frontier.len(), 200);
    }

    #[test]
    fn test_pop_two() {
        let mut frontier = Frontier::from_sorted(vec![leaf(4, 1), leaf(5, 2), leaf(6, 7)]);
        let (first, second) = frontier.pop_two().unwrap();
        assert_eq!(first, leaf(4, 1));
        assert_eq!(second, leaf(5, 2));
        assert_eq!(frontier.len(), 1);
        assert!(frontier.pop_two().is_none());
        assert_eq!(frontier.into_root(), Some(leaf(6, 7)));
    }

    #[test]
    fn test_into_root_requires_single_node() {
        let frontier = Frontier::from_sorted(vec![leaf(0, 1), leaf(1, 1)]);
        assert!(frontier.into_root().is_none());
    }
}
