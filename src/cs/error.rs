//! Error types shared by the compression routines.

use thiserror::Error;

/// Result type for crate operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while building codes or encoding data.
#[derive(Debug, Error)]
pub enum Error {
    /// A caller-supplied argument is out of range.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The input contains a single distinct symbol and the encoder was
    /// configured to reject it.
    #[error("degenerate alphabet: one distinct symbol repeated {occurrences} times")]
    DegenerateAlphabet { occurrences: usize },

    /// A byte was fed to the packer that the code table does not cover.
    #[error("no code for symbol 0x{0:02x}")]
    UnknownSymbol(u8),

    /// I/O error from reading the input or writing the output.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
