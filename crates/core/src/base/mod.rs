//! Base types for sequence representation.
//!
//! This module provides the foundational types for representing nucleotides
//! and nucleotide sequences in the dnastore crates.

mod nucleotide;
mod sequence;

pub use nucleotide::Nucleotide;
pub use sequence::Sequence;
