//! Homopolymer-constrained symbol transition codec.
//!
//! Each emitted base is chosen from a small ordered set of legal successors
//! that depends only on the previous base and on whether the last two bases
//! were equal. A four-member set carries 2 bits, smaller sets carry 1 bit.
//!
//! Regular sets, keyed by the previous base (`None` at stream start):
//!
//! | previous     | set        |
//! |--------------|------------|
//! | none, A, T   | A, C, G, T |
//! | C, G         | A, T       |
//!
//! Double-run sets, used after two equal bases and keyed by that base:
//!
//! | repeated | set     |
//! |----------|---------|
//! | A        | C, G, T |
//! | C, G     | A, T    |
//! | T        | A, C, G |
//!
//! No double-run set contains its key, so runs never exceed two bases.
//! Set order is part of the wire format: encode selects by position and
//! decode looks the position back up.

use crate::bits::BitStream;
use crate::error::CodecError;
use dnastore_core::{Nucleotide, Sequence};

use Nucleotide::{A, C, G, T};

const ANY: &[Nucleotide] = &[A, C, G, T];
const WEAK: &[Nucleotide] = &[A, T];
const AFTER_AA: &[Nucleotide] = &[C, G, T];
const AFTER_TT: &[Nucleotide] = &[A, C, G];

/// Legal successors when the last two bases differ (or fewer than two exist).
pub const fn regular_set(previous: Option<Nucleotide>) -> &'static [Nucleotide] {
    match previous {
        None | Some(A) | Some(T) => ANY,
        Some(C) | Some(G) => WEAK,
    }
}

/// Legal successors after two consecutive copies of `repeated`.
pub const fn double_run_set(repeated: Nucleotide) -> &'static [Nucleotide] {
    match repeated {
        A => AFTER_AA,
        C | G => WEAK,
        T => AFTER_TT,
    }
}

/// Bits carried by one symbol drawn from `set`.
#[inline]
pub const fn chunk_width(set: &[Nucleotide]) -> usize {
    if set.len() == 4 {
        2
    } else {
        1
    }
}

/// Running state of one encode or decode pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TransitionState {
    previous: Option<Nucleotide>,
    last_two_equal: bool,
}

impl TransitionState {
    /// State at the start of a stream.
    pub const fn new() -> Self {
        Self {
            previous: None,
            last_two_equal: false,
        }
    }

    pub const fn previous(&self) -> Option<Nucleotide> {
        self.previous
    }

    pub const fn last_two_equal(&self) -> bool {
        self.last_two_equal
    }

    /// Ordered set of bases that may legally come next.
    pub const fn active_set(&self) -> &'static [Nucleotide] {
        match (self.previous, self.last_two_equal) {
            (Some(repeated), true) => double_run_set(repeated),
            (previous, _) => regular_set(previous),
        }
    }

    /// Record that `next` was emitted (or consumed).
    #[inline]
    pub fn advance(&mut self, next: Nucleotide) {
        self.last_two_equal = matches!(self.previous, Some(prev) if prev == next);
        self.previous = Some(next);
    }
}

/// Map a bit stream onto a constrained base sequence.
///
/// If the final chunk needs two bits but only one remains, it is padded with
/// a zero bit, so decoding may return one extra trailing zero.
pub fn encode_bits(bits: &BitStream) -> Sequence {
    let mut state = TransitionState::new();
    let mut seq = Sequence::with_capacity(bits.len() / 2 + 1);
    let mut offset = 0;

    while offset < bits.len() {
        let set = state.active_set();
        let width = chunk_width(set);

        let mut idx = bits.read(offset, width) as usize;
        if idx >= set.len() {
            idx %= set.len();
        }

        let base = set[idx];
        seq.push(base);
        state.advance(base);
        offset += width;
    }

    seq
}

/// Recover the bit stream from a base sequence.
///
/// Fails with [`CodecError::MalformedSymbol`] at the first base that is not
/// in its active set, or whose position cannot be written in the set's chunk
/// width (the third member of a three-member set).
pub fn decode_bits(seq: &[Nucleotide]) -> Result<BitStream, CodecError> {
    let mut state = TransitionState::new();
    let mut bits = BitStream::with_capacity(seq.len() * 2);

    for (position, &symbol) in seq.iter().enumerate() {
        let set = state.active_set();
        let width = chunk_width(set);

        let idx = set
            .iter()
            .position(|&n| n == symbol)
            .filter(|&i| i < 1 << width)
            .ok_or(CodecError::MalformedSymbol { position, symbol })?;

        bits.push_bits(idx as u8, width);
        state.advance(symbol);
    }

    Ok(bits)
}

/// Check that every base of `seq` is a legal transition.
pub fn validate_transitions(seq: &[Nucleotide]) -> Result<(), CodecError> {
    decode_bits(seq).map(|_| ())
}
