//! # huffpack
//!
//! Static Huffman compression of byte streams.
//!
//! The encoder counts byte frequencies over the whole input, builds a prefix
//! tree by repeatedly merging the two rarest nodes, derives one bit-code per
//! byte and packs the concatenated codes into bytes. The output is the bare
//! bitstream: the code table is returned alongside it and must travel
//! out-of-band.
//!
//! ```rust
//! use huffpack::huffman::HuffmanEncoder;
//!
//! let encoded = HuffmanEncoder::default().encode(&[0, 0, 0, 1])?;
//! assert_eq!(encoded.bytes, vec![0b1110_0000]);
//! # Ok::<(), huffpack::Error>(())
//! ```

pub mod cs;

pub use cs::compression::{huffman, Compression};
pub use cs::error::{Error, Result};
