//! The target specification: the frequency vectors the optimizer is asked
//! to match, as a set of tagged entries rather than a loosely keyed map.

use crate::code::GeneticCode;
use crate::error::{CfResult, CodonForgeError};
use crate::freqs::codons::{codon_frequencies, UsageMode};
use crate::freqs::kmer::{all_kmers, kmer_frequency_vector};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

const SUM_TOLERANCE: f64 = 1e-6;

/// One optimization target: either a k-mer frequency distribution for a
/// specific k, or a codon-usage distribution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TargetEntry {
    Kmer {
        k: usize,
        freqs: BTreeMap<String, f64>,
    },
    Codons {
        freqs: BTreeMap<String, f64>,
    },
}

/// An ordered, validated set of target entries. Entries are held with ks
/// ascending and the codon-usage entry last, which fixes the layout of the
/// flattened target vector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TargetSpec {
    entries: Vec<TargetEntry>,
}

impl TargetSpec {
    pub fn new(mut entries: Vec<TargetEntry>) -> CfResult<Self> {
        entries.sort_by_key(|entry| match entry {
            TargetEntry::Kmer { k, .. } => (0, *k),
            TargetEntry::Codons { .. } => (1, 0),
        });
        let spec = Self { entries };
        spec.validate()?;
        Ok(spec)
    }

    /// Parse and validate a JSON target specification.
    pub fn from_json(json: &str) -> CfResult<Self> {
        let parsed: TargetSpec = serde_json::from_str(json)?;
        Self::new(parsed.entries)
    }

    pub fn entries(&self) -> &[TargetEntry] {
        &self.entries
    }

    /// Requested k values, ascending.
    pub fn ks(&self) -> Vec<usize> {
        self.entries
            .iter()
            .filter_map(|entry| match entry {
                TargetEntry::Kmer { k, .. } => Some(*k),
                TargetEntry::Codons { .. } => None,
            })
            .collect()
    }

    pub fn has_codons(&self) -> bool {
        self.entries
            .iter()
            .any(|entry| matches!(entry, TargetEntry::Codons { .. }))
    }

    /// Total length of the flattened vector (4^k per k-mer entry, 64 for
    /// the codon entry).
    pub fn vector_len(&self) -> usize {
        self.entries
            .iter()
            .map(|entry| match entry {
                TargetEntry::Kmer { k, .. } => 4usize.pow(*k as u32),
                TargetEntry::Codons { .. } => 64,
            })
            .sum()
    }

    fn validate(&self) -> CfResult<()> {
        if self.entries.is_empty() {
            return Err(CodonForgeError::Validation(
                "target specification may not be empty".into(),
            ));
        }
        let mut seen_ks = Vec::new();
        let mut seen_codons = false;
        for entry in &self.entries {
            match entry {
                TargetEntry::Kmer { k, freqs } => {
                    if *k < 1 {
                        return Err(CodonForgeError::Validation(
                            "k may not be less than 1".into(),
                        ));
                    }
                    if seen_ks.contains(k) {
                        return Err(CodonForgeError::Validation(format!(
                            "duplicate target entry for k = {}",
                            k
                        )));
                    }
                    seen_ks.push(*k);
                    validate_freqs(freqs, *k, &format!("k = {}", k))?;
                }
                TargetEntry::Codons { freqs } => {
                    if seen_codons {
                        return Err(CodonForgeError::Validation(
                            "duplicate codon-usage target entry".into(),
                        ));
                    }
                    seen_codons = true;
                    validate_freqs(freqs, 3, "codons")?;
                }
            }
        }
        Ok(())
    }

    /// The flattened target vector: lexicographic key order within each
    /// entry, entries in spec order, missing keys zero-filled.
    pub fn target_vector(&self) -> Vec<f64> {
        let mut vector = Vec::with_capacity(self.vector_len());
        for entry in &self.entries {
            let (width, freqs) = match entry {
                TargetEntry::Kmer { k, freqs } => (*k, freqs),
                TargetEntry::Codons { freqs } => (3, freqs),
            };
            for key in all_kmers(width) {
                vector.push(*freqs.get(&key).unwrap_or(&0.0));
            }
        }
        vector
    }

    /// The candidate's frequency vector in the same layout as
    /// [`target_vector`](Self::target_vector).
    pub fn candidate_vector(&self, dna: &str, genetic_code: &GeneticCode) -> CfResult<Vec<f64>> {
        let mut vector = Vec::with_capacity(self.vector_len());
        let ks = self.ks();
        if !ks.is_empty() {
            vector.extend(kmer_frequency_vector(&[dna], &ks)?);
        }
        if self.has_codons() {
            let freqs = codon_frequencies(dna, UsageMode::Absolute, genetic_code)?;
            vector.extend(freqs.values().copied());
        }
        Ok(vector)
    }
}

fn validate_freqs(freqs: &BTreeMap<String, f64>, width: usize, label: &str) -> CfResult<()> {
    if freqs.is_empty() {
        return Err(CodonForgeError::Validation(format!(
            "target entry for {} has no frequencies",
            label
        )));
    }
    let mut sum = 0.0;
    for (key, &value) in freqs {
        if key.len() != width || !key.bytes().all(|b| matches!(b, b'A' | b'C' | b'G' | b'T')) {
            return Err(CodonForgeError::Validation(format!(
                "target key '{}' for {} is not a length-{} string over A/C/G/T",
                key, label, width
            )));
        }
        if !(0.0..=1.0).contains(&value) {
            return Err(CodonForgeError::Validation(format!(
                "target frequency {} for '{}' is outside [0, 1]",
                value, key
            )));
        }
        sum += value;
    }
    if (sum - 1.0).abs() > SUM_TOLERANCE {
        return Err(CodonForgeError::Validation(format!(
            "target frequencies for {} sum to {}, expected 1.0",
            label, sum
        )));
    }
    Ok(())
}
