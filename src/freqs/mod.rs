//! The frequency engine: k-mer and codon-usage frequency distributions,
//! and the target specification the optimizer matches against.

use crate::error::{CfResult, CodonForgeError};

pub mod codons;
pub mod kmer;
pub mod target;

pub use codons::{codon_frequencies, UsageMode};
pub use kmer::{kmer_counts, kmer_frequencies, kmer_frequency_vector};
pub use target::{TargetEntry, TargetSpec};

/// Fraction of G/C bases in a DNA sequence.
pub fn gc_content(dna: &str) -> CfResult<f64> {
    if dna.is_empty() {
        return Err(CodonForgeError::Validation(
            "sequence may not be empty".into(),
        ));
    }
    let mut gc = 0usize;
    for b in dna.bytes() {
        match b.to_ascii_uppercase() {
            b'G' | b'C' => gc += 1,
            b'A' | b'T' => {}
            other => {
                return Err(CodonForgeError::Validation(format!(
                    "invalid DNA base '{}'",
                    other as char
                )))
            }
        }
    }
    Ok(gc as f64 / dna.len() as f64)
}
