//! Text-level entry point combining the adapter, codec and framer.

use crate::config::StorageConfig;
use crate::error::CodecError;
use crate::strategies::RedundantCodec;
use crate::text::{bytes_to_text, text_to_bytes};
use crate::traits::Codec;
use dnastore_core::{Nucleotide, Sequence};
use tracing::warn;

/// Encodes text into DNA and back, following a [`StorageConfig`].
///
/// ```
/// use dnastore_codec::DnaStorage;
///
/// let storage = DnaStorage::default();
/// let dna = storage.encode("Hi")?;
/// assert_eq!(storage.decode_text(dna.as_slice()), "Hi");
/// # Ok::<(), dnastore_codec::CodecError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct DnaStorage {
    config: StorageConfig,
}

impl DnaStorage {
    pub fn new(config: StorageConfig) -> Result<Self, CodecError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &StorageConfig {
        &self.config
    }

    /// Encode `text` using the configured strategy and copy count.
    pub fn encode(&self, text: &str) -> Result<Sequence, CodecError> {
        self.encode_bytes(&text_to_bytes(text))
    }

    /// Encode `text` as `copies` framed copies, whatever the configured
    /// strategy.
    pub fn encode_with_copies(&self, text: &str, copies: usize) -> Result<Sequence, CodecError> {
        RedundantCodec::new(copies)?.encode(&text_to_bytes(text))
    }

    pub fn encode_bytes(&self, data: &[u8]) -> Result<Sequence, CodecError> {
        self.config.strategy.encode(data, self.config.copies)
    }

    /// Decode, reporting why nothing could be recovered.
    pub fn try_decode(&self, stream: &[Nucleotide]) -> Result<Vec<u8>, CodecError> {
        self.config.strategy.decode(stream)
    }

    /// Decode, returning an empty result when the stream holds no payload
    /// or the payload breaks the transition rules.
    pub fn decode(&self, stream: &[Nucleotide]) -> Vec<u8> {
        match self.try_decode(stream) {
            Ok(bytes) => bytes,
            Err(e) => {
                warn!(error = %e, stream_len = stream.len(), "decoding failed, returning empty result");
                Vec::new()
            }
        }
    }

    /// [`DnaStorage::decode`] mapped back to text, one `char` per byte.
    pub fn decode_text(&self, stream: &[Nucleotide]) -> String {
        bytes_to_text(&self.decode(stream))
    }
}
