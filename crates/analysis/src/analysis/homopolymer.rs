//! Homopolymer run analysis.

use dnastore_core::Nucleotide;

/// Maximal runs of identical bases, in order, as `(base, length)`.
///
/// # Examples
///
/// ```
/// use dnastore_analysis::analysis::homopolymer_runs;
/// use dnastore_core::Nucleotide::{A, C};
///
/// assert_eq!(homopolymer_runs(&[A, A, C]), vec![(A, 2), (C, 1)]);
/// ```
pub fn homopolymer_runs(seq: &[Nucleotide]) -> Vec<(Nucleotide, usize)> {
    let mut runs: Vec<(Nucleotide, usize)> = Vec::new();
    for &base in seq {
        match runs.last_mut() {
            Some((last, len)) if *last == base => *len += 1,
            _ => runs.push((base, 1)),
        }
    }
    runs
}

/// Length of the longest homopolymer run; 0 for an empty sequence.
pub fn max_homopolymer_run(seq: &[Nucleotide]) -> usize {
    homopolymer_runs(seq)
        .into_iter()
        .map(|(_, len)| len)
        .max()
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use dnastore_core::Nucleotide::{A, C, G, T};

    #[test]
    fn test_runs_empty() {
        assert!(homopolymer_runs(&[]).is_empty());
        assert_eq!(max_homopolymer_run(&[]), 0);
    }

    #[test]
    fn test_runs_single() {
        assert_eq!(homopolymer_runs(&[G]), vec![(G, 1)]);
        assert_eq!(max_homopolymer_run(&[G]), 1);
    }

    #[test]
    fn test_runs_mixed() {
        let seq = [C, A, A, C, A, G, T, T, T, A];
        assert_eq!(
            homopolymer_runs(&seq),
            vec![(C, 1), (A, 2), (C, 1), (A, 1), (G, 1), (T, 3), (A, 1)]
        );
        assert_eq!(max_homopolymer_run(&seq), 3);
    }
}
