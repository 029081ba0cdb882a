//! DNA storage codec.
//!
//! Maps bytes onto A/C/G/T sequences with no homopolymer run longer than two,
//! then protects the result with framed, replicated copies that are
//! majority-voted on decode.
//!
//! ```
//! use dnastore_codec::{CodecStrategy, Codec, RedundantCodec};
//!
//! let codec = RedundantCodec::new(4).unwrap();
//! let dna = codec.encode(b"A").unwrap();
//! assert_eq!(dna.to_string(), "ATGCCAACAGGCTA".repeat(4));
//! assert_eq!(CodecStrategy::Redundant.decode(dna.as_slice()).unwrap(), b"A");
//! ```

mod bits;
mod config;
mod error;
pub mod framing;
mod storage;
mod strategies;
pub mod text;
mod traits;
pub mod transition;

pub use bits::BitStream;
pub use config::StorageConfig;
pub use error::CodecError;
pub use framing::{RedundancyFramer, Vote, DEFAULT_COPIES};
pub use storage::DnaStorage;
pub use strategies::{RedundantCodec, TransitionCodec};
pub use traits::Codec;
pub use transition::{validate_transitions, TransitionState};

use dnastore_core::{Nucleotide, Sequence};
use serde::{Deserialize, Serialize};

/// Strategies for packaging encoded sequences.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CodecStrategy {
    /// Transition-coded payload only.
    Plain,
    /// Payload framed by `ATGC`/`GCTA` and repeated, majority-voted on decode.
    #[default]
    Redundant,
}

impl CodecStrategy {
    /// Encode using the selected strategy. `copies` is ignored by `Plain`.
    pub fn encode(&self, data: &[u8], copies: usize) -> Result<Sequence, CodecError> {
        match self {
            CodecStrategy::Plain => TransitionCodec.encode(data),
            CodecStrategy::Redundant => RedundantCodec::new(copies)?.encode(data),
        }
    }

    /// Decode using the selected strategy.
    pub fn decode(&self, seq: &[Nucleotide]) -> Result<Vec<u8>, CodecError> {
        match self {
            CodecStrategy::Plain => TransitionCodec.decode(seq),
            CodecStrategy::Redundant => RedundantCodec::default().decode(seq),
        }
    }
}

impl std::fmt::Display for CodecStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Plain => write!(f, "plain"),
            Self::Redundant => write!(f, "redundant"),
        }
    }
}

impl std::str::FromStr for CodecStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "plain" => Ok(Self::Plain),
            "redundant" => Ok(Self::Redundant),
            _ => Err(format!(
                "Unknown codec strategy: {s}. Available: plain, redundant"
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_strategies_round_trip() {
        let data = b"dnastore";

        let encoded = CodecStrategy::Plain.encode(data, 1).unwrap();
        assert_eq!(CodecStrategy::Plain.decode(encoded.as_slice()).unwrap(), data);

        let encoded = CodecStrategy::Redundant.encode(data, 3).unwrap();
        assert_eq!(CodecStrategy::Redundant.decode(encoded.as_slice()).unwrap(), data);
    }

    #[test]
    fn test_strategy_names() {
        for strategy in [CodecStrategy::Plain, CodecStrategy::Redundant] {
            assert_eq!(CodecStrategy::from_str(&strategy.to_string()), Ok(strategy));
        }
        assert!(CodecStrategy::from_str("turbo").is_err());
        assert_eq!(CodecStrategy::default(), CodecStrategy::Redundant);
    }

    #[test]
    fn test_plain_rejects_framed_stream() {
        let framed = CodecStrategy::Redundant.encode(b"A", 2).unwrap();
        // Markers are not legal transitions from the stream start onward
        assert!(CodecStrategy::Plain.decode(framed.as_slice()).is_err());
    }
}
