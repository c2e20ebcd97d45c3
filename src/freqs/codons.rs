//! Codon-usage frequency distributions.

use crate::code::{self, GeneticCode};
use crate::error::{CfResult, CodonForgeError};
use std::collections::BTreeMap;
use strum_macros::{Display, EnumString};

/// How codon counts are normalized.
///
/// `Absolute`: all 64 frequencies sum to 1. `Relative`: each codon's count
/// is divided by the total for its synonymous group, so every amino acid's
/// codon usages sum to 1 independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum UsageMode {
    Absolute,
    Relative,
}

/// Codon frequencies of a sequence, with all 64 codons present
/// (zero-filled when unobserved).
///
/// In relative mode, a synonymous group absent from the sequence gets
/// uniform weight 1/|group| so downstream weighted draws never face an
/// all-zero group.
pub fn codon_frequencies(
    seq: &str,
    mode: UsageMode,
    genetic_code: &GeneticCode,
) -> CfResult<BTreeMap<String, f64>> {
    if seq.is_empty() {
        return Err(CodonForgeError::Validation(
            "sequence may not be empty".into(),
        ));
    }
    if seq.len() % 3 != 0 {
        return Err(CodonForgeError::Validation(
            "sequence length must be divisible by 3".into(),
        ));
    }

    let upper = seq.to_ascii_uppercase();
    let mut counts = [0u64; 64];
    for chunk in upper.as_bytes().chunks_exact(3) {
        let idx = code::codon_index(chunk).ok_or_else(|| {
            CodonForgeError::Validation(format!(
                "invalid codon '{}'",
                String::from_utf8_lossy(chunk)
            ))
        })?;
        counts[idx] += 1;
    }

    let total = (upper.len() / 3) as f64;
    let absolute: Vec<f64> = counts.iter().map(|&c| c as f64 / total).collect();

    let values: Vec<f64> = match mode {
        UsageMode::Absolute => absolute,
        UsageMode::Relative => (0..64)
            .map(|idx| {
                let group = genetic_code.synonym_indices(idx);
                let group_sum: f64 = group.iter().map(|&i| absolute[i]).sum();
                if group_sum > 0.0 {
                    absolute[idx] / group_sum
                } else {
                    1.0 / group.len() as f64
                }
            })
            .collect(),
    };

    Ok((0..64).map(|idx| (code::codon_str(idx), values[idx])).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::code::GeneticCode;

    #[test]
    fn absolute_frequencies_sum_to_one() {
        let code = GeneticCode::standard();
        let freqs = codon_frequencies("ATGAAACTT", UsageMode::Absolute, code).unwrap();
        assert_eq!(freqs.len(), 64);
        let sum: f64 = freqs.values().sum();
        assert!((sum - 1.0).abs() < 1e-9);
        assert!((freqs["ATG"] - 1.0 / 3.0).abs() < 1e-9);
        assert_eq!(freqs["GGG"], 0.0);
    }

    #[test]
    fn relative_groups_sum_to_one() {
        let code = GeneticCode::standard();
        let freqs = codon_frequencies("AAAAAGAAA", UsageMode::Relative, code).unwrap();
        // Lysine group: AAA used twice, AAG once.
        assert!((freqs["AAA"] - 2.0 / 3.0).abs() < 1e-9);
        assert!((freqs["AAG"] - 1.0 / 3.0).abs() < 1e-9);
        for codon in ["AAA", "ATG", "GGA"] {
            let group = code.synonymous_codons(codon).unwrap();
            let group_sum: f64 = group.iter().map(|c| freqs[c]).sum();
            assert!(
                (group_sum - 1.0).abs() < 1e-9,
                "group of {} sums to {}",
                codon,
                group_sum
            );
        }
    }

    #[test]
    fn unused_group_defaults_to_uniform_weight() {
        let code = GeneticCode::standard();
        let freqs = codon_frequencies("ATG", UsageMode::Relative, code).unwrap();
        // Glycine (GGA/GGC/GGG/GGT) never appears.
        for codon in ["GGA", "GGC", "GGG", "GGT"] {
            assert!((freqs[codon] - 0.25).abs() < 1e-9);
        }
    }

    #[test]
    fn partial_codon_is_rejected() {
        let code = GeneticCode::standard();
        assert!(codon_frequencies("ATGA", UsageMode::Absolute, code).is_err());
        assert!(codon_frequencies("", UsageMode::Absolute, code).is_err());
    }
}
