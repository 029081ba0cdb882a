//! Sequence analysis for dnastore.
//!
//! Descriptive statistics over encoded DNA: base composition, GC content and
//! homopolymer runs.

pub mod analysis;

pub use analysis::{analyze, CompositionStats};
