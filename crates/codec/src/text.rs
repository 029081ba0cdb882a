//! Text/binary adapter.
//!
//! Characters are stored as a fixed 8 bits each: the low byte of the code
//! point. This is lossless for Latin-1 text only; anything above U+00FF is
//! truncated.

use crate::bits::BitStream;
use tracing::debug;

/// Map each `char` to the low 8 bits of its code point.
pub fn text_to_bytes(text: &str) -> Vec<u8> {
    text.chars().map(|c| (u32::from(c) & 0xFF) as u8).collect()
}

/// Map each byte to the `char` with the same code point.
pub fn bytes_to_text(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| char::from(b)).collect()
}

pub fn text_to_bits(text: &str) -> BitStream {
    BitStream::from_bytes(&text_to_bytes(text))
}

/// Pack decoded bits into bytes.
///
/// Encoded input is always a whole number of bytes and the transition codec
/// pads at most one bit, so a trailing partial group is padding and is
/// dropped.
pub fn bits_to_bytes(bits: &BitStream) -> Vec<u8> {
    let trailing = bits.trailing_bits();
    if trailing != 0 {
        debug!(trailing, "discarding padding bits after last whole byte");
    }
    bits.to_bytes()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_is_eight_bits_per_char() {
        let bits = text_to_bits("Hi");
        assert_eq!(bits.len(), 16);
        assert_eq!(bits.to_string(), "0100100001101001");
    }

    #[test]
    fn test_code_points_are_truncated() {
        // U+0141 keeps only 0x41
        assert_eq!(text_to_bytes("\u{141}"), vec![0x41]);
        assert_eq!(text_to_bytes("é"), vec![0xE9]);
    }

    #[test]
    fn test_latin1_round_trip() {
        let text = "caf\u{e9} \u{ff}!";
        assert_eq!(bytes_to_text(&text_to_bytes(text)), text);
    }

    #[test]
    fn test_bits_to_bytes_ignores_padding_bit() {
        let mut bits = text_to_bits("A");
        bits.push(false);
        assert_eq!(bits_to_bytes(&bits), b"A".to_vec());
    }
}
