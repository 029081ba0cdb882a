//! Ordered bit stream consumed and produced by the transition codec.

use crate::error::CodecError;
use std::fmt;
use std::str::FromStr;

/// An ordered sequence of bits, most significant bit of each byte first.
///
/// Reads past the end are zero-padded on the right, which is how the
/// transition codec fills a final 2-bit chunk when only one bit remains.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BitStream(Vec<bool>);

impl BitStream {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn with_capacity(bits: usize) -> Self {
        Self(Vec::with_capacity(bits))
    }

    /// Expand `bytes` into bits, MSB first.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let mut bits = Self::with_capacity(bytes.len() * 8);
        for &byte in bytes {
            bits.push_bits(byte, 8);
        }
        bits
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<bool> {
        self.0.get(index).copied()
    }

    #[inline]
    pub fn push(&mut self, bit: bool) {
        self.0.push(bit);
    }

    /// Append the low `width` bits of `value`, MSB first.
    pub fn push_bits(&mut self, value: u8, width: usize) {
        debug_assert!(width <= 8);
        for shift in (0..width).rev() {
            self.0.push((value >> shift) & 1 == 1);
        }
    }

    /// Read `width` bits starting at `offset` as an unsigned integer.
    ///
    /// Positions at or beyond the end read as zero.
    pub fn read(&self, offset: usize, width: usize) -> u8 {
        debug_assert!(width <= 8);
        (0..width).fold(0u8, |acc, i| {
            let bit = self.get(offset + i).unwrap_or(false);
            (acc << 1) | u8::from(bit)
        })
    }

    /// Pack complete groups of 8 bits into bytes.
    ///
    /// A trailing group shorter than 8 bits is not emitted; see
    /// [`BitStream::trailing_bits`].
    pub fn to_bytes(&self) -> Vec<u8> {
        self.0
            .chunks_exact(8)
            .map(|chunk| chunk.iter().fold(0u8, |acc, &b| (acc << 1) | u8::from(b)))
            .collect()
    }

    /// Number of bits after the last complete byte.
    pub fn trailing_bits(&self) -> usize {
        self.0.len() % 8
    }

    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        self.0.iter().copied()
    }
}

impl fmt::Display for BitStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &bit in &self.0 {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

impl FromStr for BitStream {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.chars()
            .enumerate()
            .map(|(position, c)| match c {
                '0' => Ok(false),
                '1' => Ok(true),
                found => Err(CodecError::InvalidBit { position, found }),
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_bytes_msb_first() {
        let bits = BitStream::from_bytes(b"A");
        assert_eq!(bits.to_string(), "01000001");
        assert_eq!(bits.len(), 8);
    }

    #[test]
    fn test_read_pads_with_zeros() {
        let bits: BitStream = "1".parse().unwrap();
        assert_eq!(bits.read(0, 2), 0b10);
        assert_eq!(bits.read(1, 2), 0);
        assert_eq!(bits.read(0, 1), 1);
    }

    #[test]
    fn test_push_bits_fixed_width() {
        let mut bits = BitStream::new();
        bits.push_bits(1, 2);
        bits.push_bits(0, 1);
        bits.push_bits(2, 2);
        assert_eq!(bits.to_string(), "01010");
    }

    #[test]
    fn test_to_bytes_drops_partial_group() {
        let bits: BitStream = "010000010".parse().unwrap();
        assert_eq!(bits.to_bytes(), vec![0x41]);
        assert_eq!(bits.trailing_bits(), 1);
    }

    #[test]
    fn test_bytes_round_trip() {
        let data = [0x00, 0xFF, 0x5A, 0x81];
        let bits = BitStream::from_bytes(&data);
        assert_eq!(bits.trailing_bits(), 0);
        assert_eq!(bits.to_bytes(), data.to_vec());
    }

    #[test]
    fn test_parse_rejects_other_chars() {
        let err = "0120".parse::<BitStream>().unwrap_err();
        assert!(matches!(err, CodecError::InvalidBit { position: 2, found: '2' }));
    }
}
