use anyhow::Result;
use dnastore_codec::text::bytes_to_text;
use dnastore_codec::DnaStorage;
use std::path::Path;

use crate::args::DecodeArgs;
use crate::utils::{read_sequence, resolve_strategy, write_output};

pub fn decode_sequence(config_path: Option<&Path>, args: &DecodeArgs) -> Result<()> {
    let config = resolve_strategy(config_path, args.strategy)?;
    let dna = read_sequence(&args.source)?;

    let storage = DnaStorage::new(config)?;
    let text = match storage.try_decode(dna.as_slice()) {
        Ok(bytes) => bytes_to_text(&bytes),
        Err(e) if args.strict => anyhow::bail!("Could not decode sequence: {e}"),
        Err(e) => {
            eprintln!("⚠️  Could not decode sequence: {e}");
            String::new()
        }
    };

    write_output(&text, args.output.as_ref())
}
