use crate::error::CodecError;
use dnastore_core::{Nucleotide, Sequence};

/// Core trait for DNA storage codecs.
///
/// Every strategy must be able to:
/// 1.  `encode`: turn raw bytes into a nucleotide sequence ready for synthesis.
/// 2.  `decode`: turn a (possibly corrupted) sequence back into the bytes.
pub trait Codec {
    fn encode(&self, data: &[u8]) -> Result<Sequence, CodecError>;
    fn decode(&self, seq: &[Nucleotide]) -> Result<Vec<u8>, CodecError>;
}
