//! Frequency-weighted sequence sampling: amino-acid sequences drawn from
//! residue frequencies, and DNA built from codon-usage weights.

use crate::code::GeneticCode;
use crate::error::{CfResult, CodonForgeError};
use fastrand::Rng;
use std::collections::BTreeMap;

const SUM_TOLERANCE: f64 = 1e-6;

/// Draw an index according to `weights` (not required to be normalized,
/// but the total must be positive).
fn weighted_index(weights: &[f64], rng: &mut Rng) -> usize {
    let total: f64 = weights.iter().sum();
    let mut draw = rng.f64() * total;
    for (i, &w) in weights.iter().enumerate() {
        if draw < w {
            return i;
        }
        draw -= w;
    }
    weights.len() - 1
}

/// Generate an amino-acid sequence of the given length by sampling each
/// residue independently from `frequencies` (values must sum to 1).
pub fn amino_acid_seq(
    length: usize,
    frequencies: &BTreeMap<char, f64>,
    rng: &mut Rng,
) -> CfResult<String> {
    if length == 0 {
        return Err(CodonForgeError::Validation(
            "length must be a positive integer".into(),
        ));
    }
    if frequencies.is_empty() {
        return Err(CodonForgeError::Validation(
            "at least one amino-acid frequency is required".into(),
        ));
    }
    let sum: f64 = frequencies.values().sum();
    if (sum - 1.0).abs() > SUM_TOLERANCE {
        return Err(CodonForgeError::Validation(format!(
            "amino-acid frequencies sum to {}, expected 1.0",
            sum
        )));
    }

    let residues: Vec<char> = frequencies.keys().copied().collect();
    let weights: Vec<f64> = frequencies.values().copied().collect();
    let mut seq = String::with_capacity(length);
    for _ in 0..length {
        seq.push(residues[weighted_index(&weights, rng)]);
    }
    Ok(seq)
}

/// Back-translate an amino-acid sequence with codons drawn according to
/// the supplied codon-usage frequencies (relative mode works best: each
/// synonymous group carries its own weights).
pub fn amino_acids_to_codons(
    aa_seq: &str,
    codon_freqs: &BTreeMap<String, f64>,
    genetic_code: &GeneticCode,
    rng: &mut Rng,
) -> CfResult<String> {
    let mut dna = String::with_capacity(aa_seq.len() * 3);
    for ch in aa_seq.chars() {
        let codons = genetic_code
            .codons_for(ch)
            .ok_or(CodonForgeError::UnknownAminoAcid(ch))?;
        let weights: Vec<f64> = codons
            .iter()
            .map(|codon| {
                codon_freqs.get(codon).copied().ok_or_else(|| {
                    CodonForgeError::Validation(format!("missing codon frequency for '{}'", codon))
                })
            })
            .collect::<CfResult<_>>()?;
        if weights.iter().sum::<f64>() <= 0.0 {
            return Err(CodonForgeError::Validation(format!(
                "codon frequencies for '{}' are all zero",
                ch
            )));
        }
        dna.push_str(&codons[weighted_index(&weights, rng)]);
    }
    Ok(dna)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::freqs::{codon_frequencies, UsageMode};

    #[test]
    fn sampled_sequence_respects_the_alphabet() {
        let mut freqs = BTreeMap::new();
        freqs.insert('A', 0.5);
        freqs.insert('L', 0.5);
        let mut rng = Rng::with_seed(11);
        let seq = amino_acid_seq(100, &freqs, &mut rng).unwrap();
        assert_eq!(seq.len(), 100);
        assert!(seq.chars().all(|c| c == 'A' || c == 'L'));
    }

    #[test]
    fn rejects_bad_length_and_unnormalized_frequencies() {
        let mut freqs = BTreeMap::new();
        freqs.insert('A', 0.4);
        let mut rng = Rng::with_seed(11);
        assert!(amino_acid_seq(0, &freqs, &mut rng).is_err());
        assert!(amino_acid_seq(5, &freqs, &mut rng).is_err());
    }

    #[test]
    fn weighted_back_translation_translates_correctly() {
        let code = GeneticCode::standard();
        let usage = codon_frequencies("ATTAATCAAACTGAACTT", UsageMode::Relative, code).unwrap();
        let mut rng = Rng::with_seed(11);
        let dna = amino_acids_to_codons("INQTEL", &usage, code, &mut rng).unwrap();
        assert_eq!(code.translate(&dna).unwrap(), "INQTEL");
    }

    #[test]
    fn forced_usage_forces_the_codon_choice() {
        let code = GeneticCode::standard();
        // All weight on ATA within the isoleucine group.
        let mut usage = BTreeMap::new();
        for codon in code.codons_for('I').unwrap() {
            usage.insert(codon, 0.0);
        }
        usage.insert("ATA".to_string(), 1.0);
        let mut rng = Rng::with_seed(11);
        let dna = amino_acids_to_codons("III", &usage, code, &mut rng).unwrap();
        assert_eq!(dna, "ATAATAATA");
    }

    #[test]
    fn missing_codon_frequency_is_an_error() {
        let code = GeneticCode::standard();
        let usage = BTreeMap::new();
        let mut rng = Rng::with_seed(11);
        assert!(amino_acids_to_codons("I", &usage, code, &mut rng).is_err());
    }
}
