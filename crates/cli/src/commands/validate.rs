use anyhow::Result;
use dnastore_codec::framing::{self, framed_len};
use dnastore_codec::{validate_transitions, CodecStrategy};
use dnastore_core::Nucleotide;
use std::path::Path;

use crate::args::SequenceInput;
use crate::utils::{read_sequence, resolve_strategy};

fn check_payload(payload: &[Nucleotide]) -> Result<()> {
    match validate_transitions(payload) {
        Ok(()) => {
            println!("  ✓ Transitions: all {} symbols legal", payload.len());
            Ok(())
        }
        Err(e) => {
            println!("  ✗ Transitions: {e}");
            anyhow::bail!("Sequence is not a valid encoding")
        }
    }
}

pub fn validate_sequence(
    config_path: Option<&Path>,
    source: &SequenceInput,
    strategy: Option<CodecStrategy>,
) -> Result<()> {
    let config = resolve_strategy(config_path, strategy)?;
    let dna = read_sequence(source)?;

    println!("🔍 Validating {} nt ({})", dna.len(), config.strategy);

    match config.strategy {
        CodecStrategy::Plain => check_payload(dna.as_slice())?,
        CodecStrategy::Redundant => {
            let Some(vote) = framing::recover(dna.as_slice()) else {
                println!("  ✗ Framing: no payload between markers");
                anyhow::bail!("Sequence is not a valid encoding");
            };

            println!(
                "  • Copies found: {} ({} distinct)",
                vote.candidates, vote.distinct
            );
            println!(
                "  • Majority: {}/{} votes, payload {} nt",
                vote.votes,
                vote.candidates,
                vote.payload.len()
            );
            if vote.is_unanimous()
                && dna.len() == vote.candidates * framed_len(vote.payload.len())
            {
                println!("  ✓ Framing: all copies intact");
            } else {
                println!("  ⚠️  Framing: damaged copies were outvoted");
            }

            check_payload(vote.payload.as_slice())?;
        }
    }

    println!("\n✓ Sequence is valid");
    Ok(())
}
