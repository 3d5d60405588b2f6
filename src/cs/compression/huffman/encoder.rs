use std::fs;
use std::path::Path;

use bitvec::prelude::*;
use log::{debug, trace, warn};
use rayon::prelude::*;

use super::bit_packer::{bit_string, BitPacker};
use super::code_table::{build_code_table, CodeTable};
use super::frequency::{build_frequency_table, FrequencyTable};
use super::tree::{build_huffman_tree, HuffmanNode};
use super::window::{estimate_with_policy, WindowEstimate};
use crate::cs::compression::{Compression, Result};
use crate::cs::error::Error;

/// What to do when the input holds a single distinct symbol.
///
/// The tree for such an input is one leaf, whose path from the root is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DegeneratePolicy {
    /// Give the symbol the code `0`, one bit per occurrence.
    #[default]
    SingleBit,
    /// Fail with [`Error::DegenerateAlphabet`].
    Reject,
}

/// Encoder settings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EncoderConfig {
    pub degenerate: DegeneratePolicy,
}

impl EncoderConfig {
    /// Default settings: [`DegeneratePolicy::SingleBit`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the policy for single-symbol inputs.
    pub fn with_degenerate_policy(mut self, policy: DegeneratePolicy) -> Self {
        self.degenerate = policy;
        self
    }
}

/// Packed output of one encode call.
///
/// Only `bytes` is the compressed stream. The code table and bit length are
/// what a decoder needs to receive separately.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Encoded {
    /// Packed codes, final byte zero-padded.
    pub bytes: Vec<u8>,
    /// Code used for each byte value present in the input.
    pub code_table: CodeTable<u8>,
    /// Number of code bits, excluding padding.
    pub bit_len: usize,
    /// Zero bits appended to fill the final byte.
    pub padding_bits: usize,
}

impl Encoded {
    fn empty() -> Self {
        Encoded {
            bytes: Vec::new(),
            code_table: CodeTable::default(),
            bit_len: 0,
            padding_bits: 0,
        }
    }
}

/// Static Huffman encoder for byte streams.
#[derive(Debug, Clone, Default)]
pub struct HuffmanEncoder {
    config: EncoderConfig,
}

impl HuffmanEncoder {
    /// Create an encoder with the given settings.
    pub fn new(config: EncoderConfig) -> Self {
        HuffmanEncoder { config }
    }

    /// Encode `data`, returning the packed bytes and the code table used.
    ///
    /// # Errors
    ///
    /// [`Error::DegenerateAlphabet`] if `data` holds one distinct byte and the
    /// policy is [`DegeneratePolicy::Reject`].
    pub fn encode(&self, data: &[u8]) -> Result<Encoded> {
        let freq_table = build_frequency_table(data);
        let Some(code_table) = derive_codes(&freq_table, self.config.degenerate)? else {
            debug!("huffman: empty input");
            return Ok(Encoded::empty());
        };
        for (symbol, code) in code_table.iter() {
            trace!("huffman: 0x{:02x} -> {}", symbol, bit_string(code));
        }

        let expected_bits = code_table.encoded_bit_len(&freq_table);
        let mut bytes = Vec::with_capacity(expected_bits.div_ceil(8));
        let mut packer = BitPacker::new();
        for &byte in data {
            let code = code_table.get(&byte).ok_or(Error::UnknownSymbol(byte))?;
            packer.push(code, &mut bytes);
        }
        let bit_len = packer.bits_pushed();
        let padding_bits = packer.finish(&mut bytes);
        debug_assert_eq!(bit_len, expected_bits);

        debug!(
            "huffman: {} bytes -> {} bytes ({} code bits, {} padding)",
            data.len(),
            bytes.len(),
            bit_len,
            padding_bits
        );

        Ok(Encoded {
            bytes,
            code_table,
            bit_len,
            padding_bits,
        })
    }

    /// Compress independent inputs in parallel.
    pub fn compress_all(&self, inputs: &[&[u8]]) -> Vec<Result<Vec<u8>>> {
        inputs.par_iter().map(|data| self.compress(data)).collect()
    }

    /// Estimate the coded size of `data` split into `window`-byte symbols.
    pub fn estimate_window_bits(&self, data: &[u8], window: usize) -> Result<WindowEstimate> {
        estimate_with_policy(data, window, self.config.degenerate)
    }
}

impl Compression for HuffmanEncoder {
    fn compress(&self, data: &[u8]) -> Result<Vec<u8>> {
        self.encode(data).map(|encoded| encoded.bytes)
    }
}

/// Build the tree for `freq_table` and derive its codes, applying `policy`
/// when the tree is a single leaf.
///
/// Returns `Ok(None)` for an empty table.
pub(super) fn derive_codes<S: Ord + Clone>(
    freq_table: &FrequencyTable<S>,
    policy: DegeneratePolicy,
) -> Result<Option<CodeTable<S>>> {
    let Some(tree) = build_huffman_tree(freq_table) else {
        return Ok(None);
    };
    debug!(
        "huffman: {} symbols, {} merges, depth {}",
        tree.symbol_count(),
        tree.merges(),
        tree.root().depth()
    );

    match tree.root() {
        HuffmanNode::Leaf { symbol, freq } => match policy {
            DegeneratePolicy::Reject => Err(Error::DegenerateAlphabet { occurrences: *freq }),
            DegeneratePolicy::SingleBit => {
                warn!("huffman: one distinct symbol, coding {} occurrences with 1 bit each", freq);
                Ok(Some(
                    std::iter::once((symbol.clone(), bitvec![u8, Msb0; 0])).collect(),
                ))
            }
        },
        root => Ok(Some(build_code_table(root))),
    }
}

/// Compress `data` with the default configuration.
pub fn huffman_compress(data: &[u8]) -> Result<Vec<u8>> {
    HuffmanEncoder::default().compress(data)
}

/// Read `input` in full, compress it, and write the packed bytes to `output`.
///
/// The code table is not written; it is returned in the [`Encoded`] value.
pub fn compress_file(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    config: &EncoderConfig,
) -> Result<Encoded> {
    let data = fs::read(input.as_ref())?;
    let encoded = HuffmanEncoder::new(config.clone()).encode(&data)?;
    fs::write(output.as_ref(), &encoded.bytes)?;
    debug!(
        "huffman: wrote {} bytes to {}",
        encoded.bytes.len(),
        output.as_ref().display()
    );
    Ok(encoded)
}
