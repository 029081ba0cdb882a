use anyhow::Result;
use dnastore_analysis::analyze;
use serde_json::json;
use std::path::PathBuf;

use crate::args::SequenceInput;
use crate::printing::format_stats;
use crate::utils::{read_sequence, write_output};

pub fn analyze_sequence(source: &SequenceInput, format: &str, output: Option<&PathBuf>) -> Result<()> {
    let dna = read_sequence(source)?;
    let stats = analyze(dna.as_slice());

    let content = match format {
        "pretty" => format_stats(stats.as_ref()),
        "json" => match &stats {
            Some(s) => serde_json::to_string_pretty(s)?,
            None => serde_json::to_string_pretty(&json!({ "total": 0, "empty": true }))?,
        },
        _ => anyhow::bail!("Unknown format '{format}'. Use: pretty or json"),
    };

    write_output(&content, output)
}
