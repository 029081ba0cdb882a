use anyhow::{Context, Result};
use dnastore_analysis::analyze;
use dnastore_codec::DnaStorage;
use std::path::Path;

use crate::args::CodecArgs;
use crate::printing::{format_stats, print_config};
use crate::utils::resolve_config;

/// Encode `text`, describe the result, then decode it again.
pub fn run_demo(config_path: Option<&Path>, text: &str, codec: &CodecArgs) -> Result<()> {
    let config = resolve_config(config_path, codec)?;
    print_config(&config);

    let storage = DnaStorage::new(config)?;
    let dna = storage.encode(text).context("Encoding failed")?;

    println!("Original text: {text}");
    println!("Encoded DNA: {dna}");
    println!();
    println!("{}", format_stats(analyze(dna.as_slice()).as_ref()));
    println!();

    let decoded = storage.decode_text(dna.as_slice());
    println!("Decoded text: {decoded}");

    if decoded == text {
        println!("\n✓ Round trip succeeded");
    } else {
        println!("\n⚠️  Decoded text differs from the original");
    }
    Ok(())
}
