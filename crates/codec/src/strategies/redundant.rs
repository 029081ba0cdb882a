use crate::error::CodecError;
use crate::framing::{self, RedundancyFramer};
use crate::strategies::TransitionCodec;
use crate::traits::Codec;
use dnastore_core::{Nucleotide, Sequence};
use tracing::warn;

/// Strategy: transition coding + framed copies with majority voting.
///
/// # How it works
///
/// The payload is wrapped as `ATGC ++ payload ++ GCTA` and repeated
/// `copies` times. On decode every copy is extracted and the most common
/// payload wins, so a minority of damaged copies is outvoted.
#[derive(Debug, Clone, Copy, Default)]
pub struct RedundantCodec {
    framer: RedundancyFramer,
}

impl RedundantCodec {
    pub fn new(copies: usize) -> Result<Self, CodecError> {
        Ok(Self {
            framer: RedundancyFramer::new(copies)?,
        })
    }

    pub fn copies(&self) -> usize {
        self.framer.copies()
    }
}

impl Codec for RedundantCodec {
    fn encode(&self, data: &[u8]) -> Result<Sequence, CodecError> {
        let payload = TransitionCodec.encode(data)?;
        if !payload.is_empty() && !framing::is_unambiguous(payload.as_slice()) {
            warn!(
                payload_len = payload.len(),
                "payload collides with a frame marker; decoding will not recover it"
            );
        }
        self.framer.frame(payload.as_slice())
    }

    fn decode(&self, seq: &[Nucleotide]) -> Result<Vec<u8>, CodecError> {
        let vote = framing::recover(seq).ok_or(CodecError::NoPayload)?;
        if !vote.is_unanimous() {
            warn!(
                votes = vote.votes,
                candidates = vote.candidates,
                "copies disagree; using majority payload"
            );
        }
        TransitionCodec.decode(vote.payload.as_slice())
    }
}
