use std::collections::BTreeMap;

use bitvec::prelude::*;

use super::bit_packer::Bits;
use super::frequency::FrequencyTable;
use super::tree::HuffmanNode;

/// Mapping from symbol to its bit-code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeTable<S> {
    codes: BTreeMap<S, Bits>,
}

impl<S: Ord> CodeTable<S> {
    /// The code for `symbol`, if it occurs in the table.
    pub fn get(&self, symbol: &S) -> Option<&BitSlice<u8, Msb0>> {
        self.codes.get(symbol).map(|code| code.as_bitslice())
    }

    /// Number of symbols with a code.
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// Returns true if the table has no codes.
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Symbols and codes in symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (&S, &BitSlice<u8, Msb0>)> {
        self.codes.iter().map(|(symbol, code)| (symbol, code.as_bitslice()))
    }

    /// Length of the longest code.
    pub fn max_code_len(&self) -> usize {
        self.codes.values().map(|code| code.len()).max().unwrap_or(0)
    }

    /// Total coded size in bits of a message with the given frequencies.
    ///
    /// Symbols absent from the table contribute nothing.
    pub fn encoded_bit_len(&self, freq_table: &FrequencyTable<S>) -> usize {
        freq_table
            .iter()
            .filter_map(|(symbol, freq)| self.codes.get(symbol).map(|code| code.len() * freq))
            .sum()
    }

    /// Returns true if no code is a prefix of another.
    pub fn is_prefix_free(&self) -> bool {
        let codes: Vec<&Bits> = self.codes.values().collect();
        codes.iter().enumerate().all(|(i, a)| {
            codes
                .iter()
                .enumerate()
                .all(|(j, b)| i == j || !b.starts_with(a.as_bitslice()))
        })
    }
}

impl<S> Default for CodeTable<S> {
    fn default() -> Self {
        CodeTable {
            codes: BTreeMap::new(),
        }
    }
}

impl<S: Ord> FromIterator<(S, Bits)> for CodeTable<S> {
    fn from_iter<I: IntoIterator<Item = (S, Bits)>>(iter: I) -> Self {
        CodeTable {
            codes: iter.into_iter().collect(),
        }
    }
}

/// Derive the code of every leaf below `node`.
///
/// Left edges append `0` and right edges append `1`. A lone leaf gets the
/// empty code.
pub fn build_code_table<S: Ord + Clone>(node: &HuffmanNode<S>) -> CodeTable<S> {
    CodeTable {
        codes: codes_below(node, Bits::new()),
    }
}

fn codes_below<S: Ord + Clone>(node: &HuffmanNode<S>, prefix: Bits) -> BTreeMap<S, Bits> {
    match node {
        HuffmanNode::Leaf { symbol, .. } => BTreeMap::from([(symbol.clone(), prefix)]),
        HuffmanNode::Internal { left, right, .. } => {
            let mut left_prefix = prefix.clone();
            left_prefix.push(false);
            let mut right_prefix = prefix;
            right_prefix.push(true);

            let mut codes = codes_below(left, left_prefix);
            codes.extend(codes_below(right, right_prefix));
            codes
        }
    }
}
