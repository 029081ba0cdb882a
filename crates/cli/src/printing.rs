use dnastore_analysis::CompositionStats;
use dnastore_codec::{CodecStrategy, StorageConfig};

pub fn print_config(config: &StorageConfig) {
    println!("\n📋 Codec Configuration");
    println!("  • Strategy: {} [--strategy]", config.strategy);
    match config.strategy {
        CodecStrategy::Redundant => {
            println!("  • Copies: {} [-k, --copies]", config.copies);
            println!("  • Markers: ATGC … GCTA");
        }
        CodecStrategy::Plain => println!("  • Copies: none (bare payload)"),
    }
    println!();
}

pub fn format_stats(stats: Option<&CompositionStats>) -> String {
    match stats {
        Some(s) => format!("{s}\nLongest homopolymer run: {}", s.longest_run),
        None => CompositionStats::EMPTY_MESSAGE.to_string(),
    }
}
