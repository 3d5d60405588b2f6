//! Bit-string to byte packing.
//!
//! Codes are appended to a pending bit-string and every complete byte is
//! flushed immediately, leaving fewer than eight bits carried to the next
//! symbol. Whole bytes are taken in the largest groups that fit (64, then
//! 32, 16 and 8 bits) so long code runs are consumed in a few steps. A group
//! is read most-significant bit first and written most-significant byte
//! first, which makes the output byte-for-byte identical to taking eight
//! bits at a time.

use bitvec::prelude::*;

/// Bit sequence in transmission order.
pub type Bits = BitVec<u8, Msb0>;

const GROUP_WIDTHS: [usize; 4] = [64, 32, 16, 8];

/// Pack every complete byte of `bits`.
///
/// Returns the packed bytes and the trailing bits (fewer than eight) that did
/// not fill a byte.
pub fn pack_bits(bits: &BitSlice<u8, Msb0>) -> (Vec<u8>, Bits) {
    let mut out = Vec::with_capacity(bits.len() / 8);
    let rest = pack_groups(bits, &mut out);
    (out, rest.to_bitvec())
}

/// Pack `bits` completely, zero-padding the final partial byte.
pub fn finish_bits(bits: &BitSlice<u8, Msb0>) -> Vec<u8> {
    let mut out = Vec::with_capacity(bits.len().div_ceil(8));
    let rest = pack_groups(bits, &mut out);
    if !rest.is_empty() {
        out.push(pad_byte(rest));
    }
    out
}

/// Render bits as a string of `0` and `1` characters.
pub fn bit_string(bits: &BitSlice<u8, Msb0>) -> String {
    bits.iter().by_vals().map(|bit| if bit { '1' } else { '0' }).collect()
}

fn pack_groups<'a>(mut bits: &'a BitSlice<u8, Msb0>, out: &mut Vec<u8>) -> &'a BitSlice<u8, Msb0> {
    for width in GROUP_WIDTHS {
        let groups = bits.len() / width;
        if groups == 0 {
            continue;
        }
        let (whole, rest) = bits.split_at(groups * width);
        for group in whole.chunks_exact(width) {
            let bytes = group_value(group).to_be_bytes();
            out.extend_from_slice(&bytes[8 - width / 8..]);
        }
        bits = rest;
    }
    bits
}

fn group_value(bits: &BitSlice<u8, Msb0>) -> u64 {
    bits.iter()
        .by_vals()
        .fold(0u64, |acc, bit| (acc << 1) | u64::from(bit))
}

fn pad_byte(bits: &BitSlice<u8, Msb0>) -> u8 {
    debug_assert!(!bits.is_empty() && bits.len() < 8);
    (group_value(bits) << (8 - bits.len())) as u8
}

/// Accumulates codes and emits whole bytes as they complete.
#[derive(Debug, Default, Clone)]
pub struct BitPacker {
    remainder: Bits,
    bits_pushed: usize,
}

impl BitPacker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `code` after the carried remainder and flush all complete bytes
    /// into `out`.
    pub fn push(&mut self, code: &BitSlice<u8, Msb0>, out: &mut Vec<u8>) {
        self.remainder.extend_from_bitslice(code);
        self.bits_pushed += code.len();
        let rest = pack_groups(&self.remainder, out).to_bitvec();
        self.remainder = rest;
    }

    /// Bits waiting for a byte to fill.
    pub fn remainder(&self) -> &BitSlice<u8, Msb0> {
        &self.remainder
    }

    /// Total code bits pushed so far, excluding padding.
    pub fn bits_pushed(&self) -> usize {
        self.bits_pushed
    }

    /// Zero-pad and flush the remainder. Returns the number of padding bits.
    pub fn finish(self, out: &mut Vec<u8>) -> usize {
        if self.remainder.is_empty() {
            return 0;
        }
        out.push(pad_byte(&self.remainder));
        8 - self.remainder.len()
    }
}
