use std::error;
use std::fmt;

/// Error returned when attempting to convert an invalid byte/character into
/// a `Nucleotide`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidNucleotide(pub u8);

impl fmt::Display for InvalidNucleotide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid nucleotide byte: {} ('{}')", self.0, self.0 as char)
    }
}

impl error::Error for InvalidNucleotide {}

/// Error type for failures when parsing a `Sequence` from text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidSequence {
    /// A character was not recognized as a valid nucleotide.
    InvalidChar { position: usize, found: char },
}

impl fmt::Display for InvalidSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidChar { position, found } => {
                write!(f, "Invalid character in sequence at {position}: '{found}'")
            }
        }
    }
}

impl error::Error for InvalidSequence {}
