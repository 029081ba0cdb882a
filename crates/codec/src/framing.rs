//! Redundancy framing: start/end markers, replicated copies and majority
//! voting on decode.
//!
//! A transmitted stream is `copies` literal repetitions of
//! `ATGC ++ payload ++ GCTA`. The markers are not escaped. Both contain `GC`,
//! which the transition rules never emit, so an encoder payload can only
//! collide by ending in `AT` (`AT ++ GCTA` reads as a start marker).
//! [`is_unambiguous`] detects any collision.

use crate::error::CodecError;
use dnastore_core::{Nucleotide, Sequence};
use std::collections::HashMap;
use tracing::debug;

use Nucleotide::{A, C, G, T};

pub const START_MARKER: [Nucleotide; 4] = [A, T, G, C];
pub const END_MARKER: [Nucleotide; 4] = [G, C, T, A];

/// Copy count used when none is configured.
pub const DEFAULT_COPIES: usize = 4;

/// Length of one framed copy around a payload of `payload_len` bases.
pub const fn framed_len(payload_len: usize) -> usize {
    START_MARKER.len() + payload_len + END_MARKER.len()
}

/// Wraps payloads in markers and replicates them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RedundancyFramer {
    copies: usize,
}

impl RedundancyFramer {
    /// Create a framer emitting `copies` copies. `copies` must be at least 1.
    pub fn new(copies: usize) -> Result<Self, CodecError> {
        if copies == 0 {
            return Err(CodecError::InvalidConfig(
                "copy count must be at least 1".into(),
            ));
        }
        Ok(Self { copies })
    }

    pub fn copies(&self) -> usize {
        self.copies
    }

    /// Build `copies` concatenated copies of `ATGC ++ payload ++ GCTA`.
    ///
    /// Fails with [`CodecError::InvalidConfig`] when the stream length does
    /// not fit in memory.
    pub fn frame(&self, payload: &[Nucleotide]) -> Result<Sequence, CodecError> {
        let unit = framed_len(payload.len());
        let too_large = || {
            CodecError::InvalidConfig(format!(
                "{} copies of a {unit}-base frame exceed the addressable size",
                self.copies
            ))
        };
        let total = unit.checked_mul(self.copies).ok_or_else(too_large)?;

        let mut stream = Vec::new();
        stream.try_reserve_exact(total).map_err(|_| too_large())?;
        for _ in 0..self.copies {
            stream.extend_from_slice(&START_MARKER);
            stream.extend_from_slice(payload);
            stream.extend_from_slice(&END_MARKER);
        }
        Ok(Sequence::from(stream))
    }
}

impl Default for RedundancyFramer {
    fn default() -> Self {
        Self {
            copies: DEFAULT_COPIES,
        }
    }
}

/// Outcome of the majority vote over recovered candidates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vote {
    /// The winning payload.
    pub payload: Sequence,
    /// How many candidates matched the winner.
    pub votes: usize,
    /// Total candidates recovered from the stream.
    pub candidates: usize,
    /// Number of distinct candidate payloads.
    pub distinct: usize,
}

impl Vote {
    /// True when every recovered candidate agreed.
    pub fn is_unanimous(&self) -> bool {
        self.votes == self.candidates
    }
}

/// Position of the first occurrence of `marker` in `haystack`.
fn find(haystack: &[Nucleotide], marker: &[Nucleotide]) -> Option<usize> {
    haystack.windows(marker.len()).position(|w| w == marker)
}

/// Split on every non-overlapping occurrence of `marker`, left to right.
fn split_on<'a>(stream: &'a [Nucleotide], marker: &[Nucleotide]) -> Vec<&'a [Nucleotide]> {
    let mut fragments = Vec::new();
    let mut rest = stream;
    while let Some(at) = find(rest, marker) {
        fragments.push(&rest[..at]);
        rest = &rest[at + marker.len()..];
    }
    fragments.push(rest);
    fragments
}

/// Recover candidate payloads from a received stream.
///
/// The stream is split on `ATGC`; each fragment is cut at its first `GCTA`
/// and fragments left empty are discarded.
pub fn candidates(stream: &[Nucleotide]) -> Vec<&[Nucleotide]> {
    split_on(stream, &START_MARKER)
        .into_iter()
        .map(|fragment| match find(fragment, &END_MARKER) {
            Some(end) => &fragment[..end],
            None => fragment,
        })
        .filter(|payload| !payload.is_empty())
        .collect()
}

/// Pick the most frequent candidate, breaking ties by first appearance.
pub fn majority_vote(candidates: &[&[Nucleotide]]) -> Option<Vote> {
    let mut counts: HashMap<&[Nucleotide], usize> = HashMap::new();
    for &candidate in candidates {
        *counts.entry(candidate).or_insert(0) += 1;
    }

    let mut best: Option<(&[Nucleotide], usize)> = None;
    for &candidate in candidates {
        let n = counts[candidate];
        if best.map_or(true, |(_, m)| n > m) {
            best = Some((candidate, n));
        }
    }

    best.map(|(payload, votes)| Vote {
        payload: Sequence::from(payload),
        votes,
        candidates: candidates.len(),
        distinct: counts.len(),
    })
}

/// Extract and vote; `None` when the stream holds no candidate.
pub fn recover(stream: &[Nucleotide]) -> Option<Vote> {
    let found = candidates(stream);
    let vote = majority_vote(&found)?;
    debug!(
        candidates = vote.candidates,
        distinct = vote.distinct,
        votes = vote.votes,
        payload_len = vote.payload.len(),
        "recovered framed payload"
    );
    Some(vote)
}

/// True when a single framed copy of `payload` splits back into exactly
/// `payload`.
pub fn is_unambiguous(payload: &[Nucleotide]) -> bool {
    if payload.is_empty() {
        return false;
    }
    let Ok(framed) = RedundancyFramer { copies: 1 }.frame(payload) else {
        return false;
    };
    matches!(candidates(framed.as_slice()).as_slice(), [only] if *only == payload)
}
