//! Sequence analysis tools.
//!
//! - Base composition and GC content
//! - Homopolymer run lengths

pub mod composition;
pub mod homopolymer;

// Re-export commonly used functions
pub use composition::{analyze, gc_content, nucleotide_composition, CompositionStats, PerBase};
pub use homopolymer::{homopolymer_runs, max_homopolymer_run};
