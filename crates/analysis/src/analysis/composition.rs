//! Sequence composition analysis
//!
//! Counts, percentages and GC content of a single nucleotide sequence.

use super::homopolymer::max_homopolymer_run;
use dnastore_core::Nucleotide;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// One value per base.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PerBase<T> {
    pub a: T,
    pub c: T,
    pub g: T,
    pub t: T,
}

impl<T: Copy> PerBase<T> {
    pub fn get(&self, base: Nucleotide) -> T {
        match base {
            Nucleotide::A => self.a,
            Nucleotide::C => self.c,
            Nucleotide::G => self.g,
            Nucleotide::T => self.t,
        }
    }

    fn map<U>(&self, f: impl Fn(T) -> U) -> PerBase<U> {
        PerBase {
            a: f(self.a),
            c: f(self.c),
            g: f(self.g),
            t: f(self.t),
        }
    }
}

/// Descriptive statistics of a non-empty sequence.
///
/// Percentages are of the total length, in the range 0 to 100.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompositionStats {
    pub total: usize,
    pub counts: PerBase<usize>,
    pub percentages: PerBase<f64>,
    /// `(G + C) / total * 100`
    pub gc_content: f64,
    /// Longest run of one repeated base.
    pub longest_run: usize,
}

impl CompositionStats {
    /// Message shown in place of statistics for an empty sequence.
    pub const EMPTY_MESSAGE: &'static str = "The DNA sequence is empty.";

    pub fn count(&self, base: Nucleotide) -> usize {
        self.counts.get(base)
    }

    pub fn percentage(&self, base: Nucleotide) -> f64 {
        self.percentages.get(base)
    }
}

impl fmt::Display for CompositionStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Total nucleotides: {}", self.total)?;
        for base in Nucleotide::ALL {
            writeln!(
                f,
                "Number of '{base}'s: {} ({:.2}%)",
                self.count(base),
                self.percentage(base)
            )?;
        }
        write!(f, "GC Content: {:.2}%", self.gc_content)
    }
}

/// Compute composition statistics.
///
/// Returns `None` for an empty sequence, which has no meaningful
/// percentages.
///
/// # Examples
///
/// ```
/// use dnastore_analysis::analyze;
/// use dnastore_core::Nucleotide::{A, C, G, T};
///
/// let stats = analyze(&[G, C, A, T]).unwrap();
/// assert_eq!(stats.total, 4);
/// assert_eq!(stats.gc_content, 50.0);
///
/// assert!(analyze(&[]).is_none());
/// ```
pub fn analyze(seq: &[Nucleotide]) -> Option<CompositionStats> {
    if seq.is_empty() {
        return None;
    }

    let mut counts = PerBase::<usize>::default();
    for &base in seq {
        match base {
            Nucleotide::A => counts.a += 1,
            Nucleotide::C => counts.c += 1,
            Nucleotide::G => counts.g += 1,
            Nucleotide::T => counts.t += 1,
        }
    }

    let total = seq.len();
    let percent = |n: usize| n as f64 / total as f64 * 100.0;

    Some(CompositionStats {
        total,
        counts,
        percentages: counts.map(percent),
        gc_content: percent(counts.g + counts.c),
        longest_run: max_homopolymer_run(seq),
    })
}

/// GC content as a proportion (0.0 to 1.0); 0.0 for an empty sequence.
pub fn gc_content(seq: &[Nucleotide]) -> f64 {
    if seq.is_empty() {
        return 0.0;
    }
    let gc_count = seq.iter().filter(|n| n.is_gc()).count();
    gc_count as f64 / seq.len() as f64
}

/// Count of every base, including bases that do not occur.
pub fn nucleotide_composition(seq: &[Nucleotide]) -> HashMap<Nucleotide, usize> {
    let mut composition: HashMap<Nucleotide, usize> =
        Nucleotide::ALL.iter().map(|&n| (n, 0)).collect();
    for &base in seq {
        *composition.entry(base).or_insert(0) += 1;
    }
    composition
}
