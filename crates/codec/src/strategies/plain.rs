use crate::error::CodecError;
use crate::text::bits_to_bytes;
use crate::traits::Codec;
use crate::transition::{decode_bits, encode_bits};
use crate::bits::BitStream;
use dnastore_core::{Nucleotide, Sequence};

/// Strategy: bare transition coding, no markers and no copies.
///
/// The output is the constrained payload alone. Any malformed base makes the
/// whole decode fail.
#[derive(Debug, Clone, Copy, Default)]
pub struct TransitionCodec;

impl Codec for TransitionCodec {
    fn encode(&self, data: &[u8]) -> Result<Sequence, CodecError> {
        Ok(encode_bits(&BitStream::from_bytes(data)))
    }

    fn decode(&self, seq: &[Nucleotide]) -> Result<Vec<u8>, CodecError> {
        let bits = decode_bits(seq)?;
        Ok(bits_to_bytes(&bits))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;
    use std::str::FromStr;

    #[test]
    fn test_encode_empty() {
        let encoded = TransitionCodec.encode(&[]).unwrap();
        assert!(encoded.is_empty());
        assert!(TransitionCodec.decode(encoded.as_slice()).unwrap().is_empty());
    }

    #[test]
    fn test_single_letter() {
        let encoded = TransitionCodec.encode(b"A").unwrap();
        assert_eq!(encoded.to_string(), "CAACAG");
        assert_eq!(TransitionCodec.decode(encoded.as_slice()).unwrap(), b"A");
    }

    #[test]
    fn test_round_trip_random() {
        let mut rng = rand::thread_rng();
        for _ in 0..20 {
            let len = rng.gen_range(1..500);
            let input: Vec<u8> = (0..len).map(|_| rng.gen()).collect();
            let encoded = TransitionCodec.encode(&input).unwrap();
            assert_eq!(TransitionCodec.decode(encoded.as_slice()).unwrap(), input);
        }
    }

    #[test]
    fn test_decode_corrupted() {
        let corrupted = Sequence::from_str("CAAAAG").unwrap();
        assert!(matches!(
            TransitionCodec.decode(corrupted.as_slice()),
            Err(CodecError::MalformedSymbol { position: 3, .. })
        ));
    }
}
