//! Property tests for the transition codec and the redundancy framer.

use dnastore_codec::framing::{self, framed_len, RedundancyFramer};
use dnastore_codec::transition::{chunk_width, encode_bits};
use dnastore_codec::{
    validate_transitions, BitStream, Codec, RedundantCodec, TransitionCodec, TransitionState,
};
use dnastore_core::Nucleotide;
use proptest::prelude::*;

fn payload_for(data: &[u8]) -> Vec<Nucleotide> {
    TransitionCodec.encode(data).unwrap().into_inner()
}

proptest! {
    #[test]
    fn prop_round_trip_any_copy_count(
        data in prop::collection::vec(any::<u8>(), 1..64),
        copies in 1usize..8,
    ) {
        prop_assume!(framing::is_unambiguous(&payload_for(&data)));

        let codec = RedundantCodec::new(copies).unwrap();
        let encoded = codec.encode(&data).unwrap();
        prop_assert_eq!(codec.decode(encoded.as_slice()).unwrap(), data);
    }

    #[test]
    fn prop_plain_round_trip(data in prop::collection::vec(any::<u8>(), 0..128)) {
        let encoded = TransitionCodec.encode(&data).unwrap();
        prop_assert_eq!(TransitionCodec.decode(encoded.as_slice()).unwrap(), data);
    }

    #[test]
    fn prop_no_triple_runs(data in prop::collection::vec(any::<u8>(), 0..128)) {
        let payload = payload_for(&data);
        for w in payload.windows(3) {
            prop_assert!(!(w[0] == w[1] && w[1] == w[2]), "run of three in {:?}", w);
        }
    }

    #[test]
    fn prop_every_symbol_is_a_legal_transition(bits in prop::collection::vec(any::<bool>(), 0..256)) {
        let mut stream = BitStream::new();
        for bit in bits {
            stream.push(bit);
        }
        let seq = encode_bits(&stream);

        let mut state = TransitionState::new();
        let mut consumed = 0;
        for symbol in seq.iter() {
            let set = state.active_set();
            prop_assert!(set.contains(&symbol));
            consumed += chunk_width(set);
            state.advance(symbol);
        }
        // Every bit was consumed, plus at most one padding bit
        prop_assert!(consumed == stream.len() || consumed == stream.len() + 1);
        prop_assert!(validate_transitions(seq.as_slice()).is_ok());
    }

    #[test]
    fn prop_one_corrupted_copy_is_outvoted(
        data in prop::collection::vec(any::<u8>(), 1..48),
        copy in 0usize..4,
        offset in any::<prop::sample::Index>(),
        shift in 1u8..4,
    ) {
        let payload = payload_for(&data);
        prop_assume!(framing::is_unambiguous(&payload));

        let codec = RedundantCodec::new(4).unwrap();
        let mut stream = codec.encode(&data).unwrap().into_inner();

        // Any symbol of one copy, markers included
        let unit = framed_len(payload.len());
        let at = copy * unit + offset.index(unit);
        let original = stream[at];
        stream[at] = Nucleotide::from_index((original.to_index() + shift) % 4).unwrap();

        prop_assert_eq!(codec.decode(&stream).unwrap(), data);
    }

    #[test]
    fn prop_framing_integrity(data in prop::collection::vec(any::<u8>(), 1..64)) {
        let payload = payload_for(&data);
        prop_assume!(framing::is_unambiguous(&payload));

        let stream = RedundancyFramer::new(4).unwrap().frame(&payload).unwrap();
        prop_assert_eq!(stream.len(), 4 * (4 + payload.len() + 4));

        let found = framing::candidates(stream.as_slice());
        prop_assert_eq!(found.len(), 4);
        prop_assert!(found.iter().all(|c| *c == payload.as_slice()));
    }
}

#[test]
fn test_payloads_never_contain_gc() {
    // C never follows G, so neither marker can appear inside a payload.
    for byte in 0..=255u8 {
        let payload = payload_for(&[byte, byte.wrapping_mul(31), !byte]);
        let text: String = payload.iter().map(|n| n.to_char()).collect();
        assert!(!text.contains("GC"), "{text}");
    }
}

#[test]
fn test_payload_ending_in_at_is_ambiguous() {
    let mut found = false;
    for byte in 0..=255u8 {
        let payload = payload_for(&[byte]);
        if payload.ends_with(&[Nucleotide::A, Nucleotide::T]) {
            assert!(!framing::is_unambiguous(&payload));
            found = true;
        }
    }
    assert!(found, "some single byte should encode to a payload ending in AT");
}
