//! # dnastore core
//!
//! Shared vocabulary for the dnastore workspace: the four-letter
//! [`Nucleotide`] alphabet and the owned [`Sequence`] type exchanged between
//! the codec, the framer and the analysis crate.

pub mod base;
pub mod errors;
pub mod prelude;

pub use base::{Nucleotide, Sequence};
