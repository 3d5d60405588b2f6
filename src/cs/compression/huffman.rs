//! Static Huffman coding of byte streams.
//!
//! Huffman coding assigns shorter bit-codes to more frequent symbols. The
//! code is derived from a binary tree built bottom-up: every leaf is a
//! symbol weighted by its occurrence count, and the two lightest nodes are
//! merged until a single root remains. The path from the root to a leaf
//! (`0` for left, `1` for right) is that symbol's code, and because symbols
//! only live at leaves no code is a prefix of another.
//!
//! This implementation provides:
//! - Frequency tables over bytes or any ordered symbol type
//! - Tree construction over a frontier kept sorted by insertion
//! - Code tables as `bitvec` bit sequences
//! - Packing into bytes through 64/32/16/8-bit groups with a carried remainder
//! - A windowed size estimate treating each window as one composite symbol
//!
//! The packed output holds no header and no table. A decoder needs the code
//! table (or the frequency table it was built from) and the original length,
//! since the zero bits padding the final byte are indistinguishable from
//! data.

mod bit_packer;
mod code_table;
mod encoder;
mod frequency;
mod frontier;
mod tree;
mod window;

pub use bit_packer::{bit_string, finish_bits, pack_bits, BitPacker, Bits};
pub use code_table::{build_code_table, CodeTable};
pub use encoder::{
    compress_file, huffman_compress, DegeneratePolicy, Encoded, EncoderConfig, HuffmanEncoder,
};
pub use frequency::{build_frequency_table, count_symbols, FrequencyTable};
pub use frontier::Frontier;
pub use tree::{build_huffman_tree, HuffmanNode, HuffmanTree};
pub use window::{estimate_window_bits, WindowEstimate};
