//! Compression algorithms implementation.
//!
//! This module provides a static Huffman coder for byte streams:
//! - Frequency counting over the whole input
//! - Prefix tree construction over a frequency-ordered frontier
//! - Code table derivation
//! - Bit packing with remainder carry between symbols
//! - A windowed estimate of the coded size
//!
//! # Examples
//!
//! ```rust
//! use huffpack::cs::compression::{huffman::HuffmanEncoder, Compression};
//!
//! let packed = HuffmanEncoder::default().compress(b"abracadabra")?;
//! assert!(packed.len() < b"abracadabra".len());
//! # Ok::<(), huffpack::Error>(())
//! ```

use crate::cs::error::Error;

/// Result type for compression operations
pub type Result<T> = std::result::Result<T, Error>;

/// Trait for compression algorithms
pub trait Compression {
    /// Compress the input data
    fn compress(&self, data: &[u8]) -> Result<Vec<u8>>;
}

pub mod huffman;
pub use huffman::{
    build_code_table, build_frequency_table, build_huffman_tree, compress_file,
    estimate_window_bits, huffman_compress, CodeTable, DegeneratePolicy, Encoded, EncoderConfig,
    HuffmanEncoder, HuffmanNode, HuffmanTree,
};
