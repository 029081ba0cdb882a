use anyhow::{Context, Result};
use dnastore_codec::DnaStorage;
use std::path::Path;

use crate::args::EncodeArgs;
use crate::utils::{read_text, resolve_config, write_output};

pub fn encode_text(config_path: Option<&Path>, args: &EncodeArgs) -> Result<()> {
    let config = resolve_config(config_path, &args.codec)?;
    let text = read_text(args.text.as_deref(), args.input.as_ref())?;

    let storage = DnaStorage::new(config)?;
    let dna = storage.encode(&text).context("Encoding failed")?;
    tracing::info!(
        chars = text.chars().count(),
        bases = dna.len(),
        strategy = %config.strategy,
        "encoded text"
    );

    write_output(&dna.to_string(), args.output.as_ref())?;
    if let Some(path) = &args.output {
        println!(
            "✓ Encoded {} characters into {} nt ({}) → {}",
            text.chars().count(),
            dna.len(),
            config.strategy,
            path.display()
        );
    }
    Ok(())
}
