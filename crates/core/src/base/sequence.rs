use super::Nucleotide;
use crate::errors::InvalidSequence;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Owned nucleotide sequence backed by a vector of `Nucleotide`s.
///
/// `Sequence` is the unit passed between the transition codec, the framer
/// and the analysis functions. It displays as, and parses from, the plain
/// letter form (`"ACGT"`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Sequence(Vec<Nucleotide>);

impl Sequence {
    /// Create a new, empty `Sequence`.
    ///
    /// ```rust
    /// # use dnastore_core::base::Sequence;
    /// let seq = Sequence::new();
    /// assert_eq!(seq.len(), 0);
    /// ```
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Create a `Sequence` with reserved capacity for `capacity` bases.
    pub fn with_capacity(capacity: usize) -> Self {
        Self(Vec::with_capacity(capacity))
    }

    /// Create a `Sequence` from a vector of `Nucleotide`s.
    pub fn from_nucleotides(nucleotides: Vec<Nucleotide>) -> Self {
        Self(nucleotides)
    }

    /// Return the length of the sequence in bases.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Return `true` if the sequence contains no bases.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Return the `Nucleotide` at `index`, or `None` if out of range.
    #[inline]
    pub fn get(&self, index: usize) -> Option<Nucleotide> {
        self.0.get(index).copied()
    }

    /// Return the last base, if any.
    #[inline]
    pub fn last(&self) -> Option<Nucleotide> {
        self.0.last().copied()
    }

    /// Borrow the underlying `Nucleotide` slice.
    #[inline]
    pub fn as_slice(&self) -> &[Nucleotide] {
        &self.0
    }

    /// Append `base` to the end of the sequence.
    #[inline]
    pub fn push(&mut self, base: Nucleotide) {
        self.0.push(base);
    }

    /// Append every base of `bases`.
    #[inline]
    pub fn extend_from_slice(&mut self, bases: &[Nucleotide]) {
        self.0.extend_from_slice(bases);
    }

    /// Iterate over the bases by value.
    pub fn iter(&self) -> impl Iterator<Item = Nucleotide> + '_ {
        self.0.iter().copied()
    }

    /// Consume the sequence and return the inner vector.
    pub fn into_inner(self) -> Vec<Nucleotide> {
        self.0
    }
}

impl AsRef<[Nucleotide]> for Sequence {
    fn as_ref(&self) -> &[Nucleotide] {
        &self.0
    }
}

impl From<Vec<Nucleotide>> for Sequence {
    fn from(nucleotides: Vec<Nucleotide>) -> Self {
        Self(nucleotides)
    }
}

impl From<&[Nucleotide]> for Sequence {
    fn from(nucleotides: &[Nucleotide]) -> Self {
        Self(nucleotides.to_vec())
    }
}

impl FromIterator<Nucleotide> for Sequence {
    fn from_iter<I: IntoIterator<Item = Nucleotide>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &nuc in &self.0 {
            write!(f, "{}", nuc.to_char())?;
        }
        Ok(())
    }
}

impl FromStr for Sequence {
    type Err = InvalidSequence;

    /// Parse a textual representation (e.g. "ACGT") into a `Sequence`.
    ///
    /// Characters not present in the standard DNA alphabet produce an
    /// `InvalidSequence` error. Parsing is case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.chars()
            .enumerate()
            .map(|(position, c)| {
                Nucleotide::try_from(c)
                    .map_err(|_| InvalidSequence::InvalidChar { position, found: c })
            })
            .collect()
    }
}
