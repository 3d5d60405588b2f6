use super::frequency::FrequencyTable;
use super::frontier::Frontier;

/// Represents a node in the Huffman tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HuffmanNode<S> {
    /// A leaf node contains a symbol and its frequency.
    Leaf { symbol: S, freq: usize },
    /// An internal node with left and right children and combined frequency.
    Internal {
        freq: usize,
        left: Box<HuffmanNode<S>>,
        right: Box<HuffmanNode<S>>,
    },
}

impl<S> HuffmanNode<S> {
    /// Returns the frequency of the node.
    pub fn freq(&self) -> usize {
        match self {
            HuffmanNode::Leaf { freq, .. } => *freq,
            HuffmanNode::Internal { freq, .. } => *freq,
        }
    }

    /// Combine two nodes under a new parent. `left` is the lighter node.
    pub fn merge(left: Self, right: Self) -> Self {
        HuffmanNode::Internal {
            freq: left.freq() + right.freq(),
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// Number of leaves below (and including) this node.
    pub fn leaf_count(&self) -> usize {
        match self {
            HuffmanNode::Leaf { .. } => 1,
            HuffmanNode::Internal { left, right, .. } => left.leaf_count() + right.leaf_count(),
        }
    }

    /// Length of the longest root-to-leaf path.
    pub fn depth(&self) -> usize {
        match self {
            HuffmanNode::Leaf { .. } => 0,
            HuffmanNode::Internal { left, right, .. } => 1 + left.depth().max(right.depth()),
        }
    }
}

/// A finished prefix tree together with the number of merges it took.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HuffmanTree<S> {
    root: HuffmanNode<S>,
    merges: usize,
}

impl<S> HuffmanTree<S> {
    /// Merge the two lightest frontier nodes until one root remains.
    ///
    /// Returns `None` for an empty frontier.
    pub fn from_frontier(mut frontier: Frontier<S>) -> Option<Self> {
        let mut merges = 0;
        while let Some((left, right)) = frontier.pop_two() {
            frontier.insert(HuffmanNode::merge(left, right));
            debug_assert!(frontier.is_sorted());
            merges += 1;
        }
        frontier.into_root().map(|root| HuffmanTree { root, merges })
    }

    /// The root node.
    pub fn root(&self) -> &HuffmanNode<S> {
        &self.root
    }

    /// Number of merges performed while building the tree.
    pub fn merges(&self) -> usize {
        self.merges
    }

    /// Number of distinct symbols in the tree.
    pub fn symbol_count(&self) -> usize {
        self.root.leaf_count()
    }
}

/// Build the Huffman tree given a frequency table.
///
/// Leaves enter the frontier ascending by frequency; equal frequencies keep
/// ascending symbol order. Returns `None` if the frequency table is empty.
pub fn build_huffman_tree<S: Ord + Clone>(
    freq_table: &FrequencyTable<S>,
) -> Option<HuffmanTree<S>> {
    let mut leaves: Vec<HuffmanNode<S>> = freq_table
        .iter()
        .map(|(symbol, &freq)| HuffmanNode::Leaf {
            symbol: symbol.clone(),
            freq,
        })
        .collect();
    // Stable sort: the table iterates in symbol order.
    leaves.sort_by_key(HuffmanNode::freq);

    HuffmanTree::from_frontier(Frontier::from_sorted(leaves))
}
