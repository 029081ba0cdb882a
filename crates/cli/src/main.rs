mod args;
mod commands;
mod defaults;
mod printing;
mod utils;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use args::{CodecArgs, DecodeArgs, EncodeArgs, SequenceInput};
use commands::{analyze, decode, demo, encode, validate};

/// dnastore: store text in synthetic DNA
///
/// Encodes text into A/C/G/T sequences that never repeat a base more than
/// twice, framed and copied so that damaged copies can be outvoted.
#[derive(Parser, Debug)]
#[command(name = "dnastore")]
#[command(author, version, about = "Encodes text into homopolymer-free DNA sequences", long_about = None)]
struct Cli {
    /// JSON configuration file (strategy, copies)
    ///
    /// Command-line flags take precedence over values from the file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug); RUST_LOG overrides
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Encode text into a DNA sequence.
    Encode(EncodeArgs),

    /// Decode a DNA sequence back into text.
    ///
    /// Prints an empty result when no payload can be recovered.
    Decode(DecodeArgs),

    /// Show base composition and GC content of a sequence.
    Analyze {
        #[command(flatten)]
        source: SequenceInput,

        /// Output format (pretty, json)
        #[arg(short, long, default_value = defaults::ANALYZE_FORMAT)]
        format: String,

        /// Output file (stdout if not specified)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Check framing and transition rules of an encoded sequence.
    Validate {
        #[command(flatten)]
        source: SequenceInput,

        /// Packaging strategy the stream was encoded with (plain, redundant)
        #[arg(long)]
        strategy: Option<dnastore_codec::CodecStrategy>,
    },

    /// Encode, analyze and decode a sample text end to end.
    Demo {
        /// Text to run through the round trip
        #[arg(short, long, default_value = defaults::DEMO_TEXT)]
        text: String,

        #[command(flatten)]
        codec: CodecArgs,
    },
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = cli.config.as_deref();

    match cli.command {
        Commands::Encode(args) => {
            encode::encode_text(config, &args)?;
        }
        Commands::Decode(args) => {
            decode::decode_sequence(config, &args)?;
        }
        Commands::Analyze {
            source,
            format,
            output,
        } => {
            analyze::analyze_sequence(&source, &format, output.as_ref())?;
        }
        Commands::Validate { source, strategy } => {
            validate::validate_sequence(config, &source, strategy)?;
        }
        Commands::Demo { text, codec } => {
            demo::run_demo(config, &text, &codec)?;
        }
    }

    Ok(())
}
