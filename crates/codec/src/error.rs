use dnastore_core::Nucleotide;
use thiserror::Error;

/// Error type for codec operations.
#[derive(Debug, Error)]
pub enum CodecError {
    /// A symbol is not a legal successor under the transition rules.
    #[error("Malformed symbol '{symbol}' at position {position}: not a legal transition")]
    MalformedSymbol { position: usize, symbol: Nucleotide },
    #[error("No framed payload could be recovered from the stream")]
    NoPayload,
    #[error("Invalid bit character '{found}' at position {position}")]
    InvalidBit { position: usize, found: char },
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("Configuration I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Configuration parse error: {0}")]
    Json(#[from] serde_json::Error),
}
