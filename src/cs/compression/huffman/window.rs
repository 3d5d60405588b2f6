//! Coded-size estimate over fixed-size windows.
//!
//! Each run of `window` consecutive bytes (the last run may be short) is
//! treated as one composite symbol, and a Huffman code is built over those
//! symbols exactly as for single bytes. The estimate is advisory and does not
//! change what the encoder emits.

use super::encoder::{derive_codes, DegeneratePolicy};
use super::frequency::count_symbols;
use crate::cs::compression::Result;
use crate::cs::error::Error;

/// Result of a windowed estimate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindowEstimate {
    /// Window size in bytes.
    pub window: usize,
    /// Number of windows, counting a short final one.
    pub windows: usize,
    /// Distinct window values.
    pub distinct: usize,
    /// Code length averaged over all windows, weighted by occurrence.
    pub average_code_len: f64,
    /// `ceil(average_code_len * windows)`.
    pub estimated_bits: usize,
}

/// Estimate the bits needed to code `data` as `window`-byte symbols.
///
/// A lone distinct window is costed at one bit per occurrence.
///
/// # Errors
///
/// [`Error::InvalidInput`] if `window` is zero.
pub fn estimate_window_bits(data: &[u8], window: usize) -> Result<WindowEstimate> {
    estimate_with_policy(data, window, DegeneratePolicy::default())
}

pub(super) fn estimate_with_policy(
    data: &[u8],
    window: usize,
    policy: DegeneratePolicy,
) -> Result<WindowEstimate> {
    if window == 0 {
        return Err(Error::InvalidInput(
            "Window size must be positive".to_string(),
        ));
    }

    let freq_table = count_symbols(data.chunks(window));
    let windows = data.len().div_ceil(window);
    let Some(code_table) = derive_codes(&freq_table, policy)? else {
        return Ok(WindowEstimate {
            window,
            windows: 0,
            distinct: 0,
            average_code_len: 0.0,
            estimated_bits: 0,
        });
    };

    // The weighted total is exact; going through the float average could
    // round up past it.
    let estimated_bits = code_table.encoded_bit_len(&freq_table);
    Ok(WindowEstimate {
        window,
        windows,
        distinct: code_table.len(),
        average_code_len: estimated_bits as f64 / windows as f64,
        estimated_bits,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cs::compression::huffman::encoder::{EncoderConfig, HuffmanEncoder};
    use approx::assert_relative_eq;

    #[test]
    fn test_zero_window_rejected() {
        assert!(matches!(
            estimate_window_bits(b"abc", 0),
            Err(Error::InvalidInput(_))
        ));
    }

    #[test]
    fn test_empty_input() {
        let estimate = estimate_window_bits(&[], 4).unwrap();
        assert_eq!(estimate.windows, 0);
        assert_eq!(estimate.estimated_bits, 0);
    }

    #[test]
    fn test_single_byte_window_matches_encoder() {
        let input = b"this is an example for huffman encoding";
        let estimate = estimate_window_bits(input, 1).unwrap();
        let encoded = HuffmanEncoder::default().encode(input).unwrap();
        assert_eq!(estimate.windows, input.len());
        assert_eq!(estimate.estimated_bits, encoded.bit_len);
    }

    #[test]
    fn test_distinct_windows() {
        let estimate = estimate_window_bits(b"aaaabbbbccccdddd", 4).unwrap();
        assert_eq!(estimate.windows, 4);
        assert_eq!(estimate.distinct, 4);
        assert_eq!(estimate.estimated_bits, 8);
        assert_relative_eq!(estimate.average_code_len, 2.0);
    }

    #[test]
    fn test_short_final_window() {
        // "ab", "ca", "b": ca -> 0, ab -> 10, b -> 11.
        let estimate = estimate_window_bits(b"abcab", 2).unwrap();
        assert_eq!(estimate.windows, 3);
        assert_eq!(estimate.distinct, 3);
        assert_eq!(estimate.estimated_bits, 5);
        assert_relative_eq!(estimate.average_code_len, 5.0 / 3.0);
    }

    #[test]
    fn test_repeated_window_follows_policy() {
        let estimate = estimate_window_bits(b"abababab", 2).unwrap();
        assert_eq!(estimate.estimated_bits, 4);

        let encoder = HuffmanEncoder::new(
            EncoderConfig::new().with_degenerate_policy(DegeneratePolicy::Reject),
        );
        assert!(matches!(
            encoder.estimate_window_bits(b"abababab", 2),
            Err(Error::DegenerateAlphabet { occurrences: 4 })
        ));
    }

    #[test]
    fn test_wider_windows_on_repetitive_data() {
        let data = b"abcdabcdabcdabcd".repeat(16);
        let bytewise = estimate_window_bits(&data, 1).unwrap();
        let wide = estimate_window_bits(&data, 4).unwrap();
        assert!(wide.estimated_bits < bytewise.estimated_bits);
    }
}
