//! Commonly used imports for convenience.
//!
//! # Example
//!
//! ```
//! use dnastore_core::prelude::*;
//! use std::str::FromStr;
//!
//! let seq = Sequence::from_str("ACGT").unwrap();
//! assert_eq!(seq.get(0), Some(Nucleotide::A));
//! ```

pub use crate::base::{Nucleotide, Sequence};
pub use crate::errors::{InvalidNucleotide, InvalidSequence};
