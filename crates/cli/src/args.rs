use clap::Args;
use dnastore_codec::CodecStrategy;
use std::path::PathBuf;

/// Where a nucleotide stream is read from.
#[derive(Args, Debug, Clone)]
pub struct SequenceInput {
    /// Nucleotide sequence given inline (A/C/G/T, case-insensitive)
    #[arg(short, long, conflicts_with = "input")]
    pub sequence: Option<String>,

    /// File holding the sequence; whitespace and line breaks are ignored
    ///
    /// Reads standard input when neither --sequence nor --input is given.
    #[arg(short, long)]
    pub input: Option<PathBuf>,
}

/// Codec settings that override the configuration file.
#[derive(Args, Debug, Clone, Default)]
pub struct CodecArgs {
    /// Packaging strategy (plain, redundant)
    #[arg(long)]
    pub strategy: Option<CodecStrategy>,

    /// Number of framed copies (redundant strategy)
    #[arg(short = 'k', long)]
    pub copies: Option<usize>,
}

#[derive(Args, Debug)]
pub struct EncodeArgs {
    /// Text to encode
    #[arg(short, long, conflicts_with = "input")]
    pub text: Option<String>,

    /// File whose contents are encoded as text
    ///
    /// Reads standard input when neither --text nor --input is given.
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    #[command(flatten)]
    pub codec: CodecArgs,

    /// Output file (stdout if not specified)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct DecodeArgs {
    #[command(flatten)]
    pub source: SequenceInput,

    /// Packaging strategy the stream was encoded with (plain, redundant)
    #[arg(long)]
    pub strategy: Option<CodecStrategy>,

    /// Exit with an error instead of printing an empty result
    #[arg(long)]
    pub strict: bool,

    /// Output file (stdout if not specified)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}
