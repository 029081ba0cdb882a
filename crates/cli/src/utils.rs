use anyhow::{Context, Result};
use dnastore_codec::{CodecStrategy, StorageConfig};
use dnastore_core::Sequence;
use std::io::Read;
use std::path::{Path, PathBuf};

use crate::args::{CodecArgs, SequenceInput};

/// Load the configuration file (or defaults) and apply command-line overrides.
pub fn resolve_config(path: Option<&Path>, overrides: &CodecArgs) -> Result<StorageConfig> {
    let mut config = match path {
        Some(p) => StorageConfig::from_json_file(p)
            .with_context(|| format!("Failed to load config from {}", p.display()))?,
        None => StorageConfig::default(),
    };

    if let Some(strategy) = overrides.strategy {
        config.strategy = strategy;
    }
    if let Some(copies) = overrides.copies {
        config.copies = copies;
    }

    config.validate().context("Invalid codec settings")?;
    Ok(config)
}

/// Same as [`resolve_config`] for commands that only choose a strategy.
pub fn resolve_strategy(path: Option<&Path>, strategy: Option<CodecStrategy>) -> Result<StorageConfig> {
    resolve_config(
        path,
        &CodecArgs {
            strategy,
            copies: None,
        },
    )
}

fn read_stdin() -> Result<String> {
    let mut buf = String::new();
    std::io::stdin()
        .read_to_string(&mut buf)
        .context("Failed to read standard input")?;
    Ok(buf)
}

/// Text given inline, from a file, or from stdin, in that order.
pub fn read_text(text: Option<&str>, input: Option<&PathBuf>) -> Result<String> {
    match (text, input) {
        (Some(t), _) => Ok(t.to_string()),
        (None, Some(path)) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        (None, None) => read_stdin(),
    }
}

/// Parse a nucleotide sequence, ignoring whitespace so wrapped files work.
pub fn read_sequence(source: &SequenceInput) -> Result<Sequence> {
    let raw = read_text(source.sequence.as_deref(), source.input.as_ref())?;
    let compact: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
    compact
        .parse::<Sequence>()
        .context("Input is not a DNA sequence")
}

/// Write `content` to `output`, or print it.
pub fn write_output(content: &str, output: Option<&PathBuf>) -> Result<()> {
    if let Some(path) = output {
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write {}", path.display()))?;
    } else {
        println!("{content}");
    }
    Ok(())
}
