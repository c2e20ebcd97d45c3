//! Genetic code tables: codon translation, inverse (amino acid to codon)
//! lookup, and synonymous-codon sets.
//!
//! Tables are derived once per process and shared read-only; callers get
//! `&'static GeneticCode` handles out of a lazily built registry.

mod tables;

use crate::error::{CfResult, CodonForgeError};
use std::collections::HashMap;
use std::sync::OnceLock;

/// Symbol used for translation stops, both in amino-acid sequences and in
/// the codon tables.
pub const STOP_SYMBOL: u8 = b'*';

fn base_index(b: u8) -> Option<usize> {
    match b.to_ascii_uppercase() {
        b'A' => Some(0),
        b'C' => Some(1),
        b'G' => Some(2),
        b'T' | b'U' => Some(3),
        _ => None,
    }
}

/// Convert a 3-base codon to an index in [0, 64).
pub(crate) fn codon_index(codon: &[u8]) -> Option<usize> {
    if codon.len() != 3 {
        return None;
    }
    let b1 = base_index(codon[0])?;
    let b2 = base_index(codon[1])?;
    let b3 = base_index(codon[2])?;
    Some(b1 * 16 + b2 * 4 + b3)
}

/// Convert an index in [0, 64) back to a codon over A/C/G/T.
pub(crate) fn index_to_codon(idx: usize) -> [u8; 3] {
    const BASES: [u8; 4] = [b'A', b'C', b'G', b'T'];
    [BASES[idx >> 4], BASES[(idx >> 2) & 3], BASES[idx & 3]]
}

pub(crate) fn codon_str(idx: usize) -> String {
    index_to_codon(idx).iter().map(|&b| b as char).collect()
}

/// A genetic code: the full mapping from all 64 codons to amino acids and
/// stop signals, plus the derived inverse and synonym tables.
pub struct GeneticCode {
    id: u32,
    name: &'static str,
    aa_for_codon: [u8; 64],
    codons_for_aa: HashMap<u8, Vec<usize>>,
    synonyms: Vec<Vec<usize>>,
}

impl GeneticCode {
    /// Look up a genetic code by its NCBI table identifier.
    ///
    /// The registry of derived tables is built on first use and lives for
    /// the process lifetime.
    pub fn from_id(id: u32) -> CfResult<&'static GeneticCode> {
        static REGISTRY: OnceLock<HashMap<u32, GeneticCode>> = OnceLock::new();
        REGISTRY
            .get_or_init(|| {
                tables::ALL
                    .iter()
                    .map(|&(id, name, aa)| (id, GeneticCode::derive(id, name, aa)))
                    .collect()
            })
            .get(&id)
            .ok_or(CodonForgeError::UnknownGeneticCode(id))
    }

    /// The standard genetic code (NCBI Table 1).
    pub fn standard() -> &'static GeneticCode {
        Self::from_id(tables::STANDARD_ID).expect("standard code is registered")
    }

    fn derive(id: u32, name: &'static str, aa_for_codon: [u8; 64]) -> Self {
        let mut codons_for_aa: HashMap<u8, Vec<usize>> = HashMap::new();
        for (idx, &aa) in aa_for_codon.iter().enumerate() {
            codons_for_aa.entry(aa).or_default().push(idx);
        }
        // Each codon's synonym set includes the codon itself.
        let synonyms = (0..64)
            .map(|idx| codons_for_aa[&aa_for_codon[idx]].clone())
            .collect();
        Self {
            id,
            name,
            aa_for_codon,
            codons_for_aa,
            synonyms,
        }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Translate a single codon. Stop codons map to `'*'`; invalid codons
    /// map to `None`.
    pub fn amino_acid(&self, codon: &str) -> Option<char> {
        codon_index(codon.as_bytes()).map(|i| self.aa_for_codon[i] as char)
    }

    /// All codons encoding the given amino acid (or `'*'` for stops).
    pub fn codons_for(&self, aa: char) -> Option<Vec<String>> {
        self.codons_for_aa
            .get(&(aa.to_ascii_uppercase() as u8))
            .map(|v| v.iter().map(|&i| codon_str(i)).collect())
    }

    /// All codons encoding the same amino acid as `codon`, including
    /// `codon` itself.
    pub fn synonymous_codons(&self, codon: &str) -> Option<Vec<String>> {
        let idx = codon_index(codon.as_bytes())?;
        Some(self.synonyms[idx].iter().map(|&i| codon_str(i)).collect())
    }

    pub(crate) fn synonym_indices(&self, idx: usize) -> &[usize] {
        &self.synonyms[idx]
    }

    /// Number of codons encoding the given amino-acid symbol (0 if the
    /// symbol has no mapping under this code).
    pub fn codon_count(&self, aa: u8) -> usize {
        self.codons_for_aa
            .get(&aa.to_ascii_uppercase())
            .map_or(0, |v| v.len())
    }

    pub fn stop_codons(&self) -> Vec<String> {
        self.codons_for_aa
            .get(&STOP_SYMBOL)
            .map(|v| v.iter().map(|&i| codon_str(i)).collect())
            .unwrap_or_default()
    }

    /// Back-translate an amino-acid sequence to one DNA sequence, taking
    /// the first-listed codon for every residue (`'*'` takes a stop codon).
    pub fn back_translate(&self, aa_seq: &str) -> CfResult<String> {
        let mut dna = String::with_capacity(aa_seq.len() * 3);
        for ch in aa_seq.chars() {
            if !ch.is_ascii() {
                return Err(CodonForgeError::UnknownAminoAcid(ch));
            }
            let codons = self
                .codons_for_aa
                .get(&(ch.to_ascii_uppercase() as u8))
                .ok_or(CodonForgeError::UnknownAminoAcid(ch))?;
            dna.push_str(&codon_str(codons[0]));
        }
        Ok(dna)
    }

    /// Translate a DNA sequence in full, including stops as `'*'`.
    pub fn translate(&self, dna: &str) -> CfResult<String> {
        if dna.len() % 3 != 0 {
            return Err(CodonForgeError::Validation(
                "sequence length must be divisible by 3".into(),
            ));
        }
        let mut aa = String::with_capacity(dna.len() / 3);
        for chunk in dna.as_bytes().chunks_exact(3) {
            let idx = codon_index(chunk).ok_or_else(|| {
                CodonForgeError::Validation(format!(
                    "invalid codon '{}'",
                    String::from_utf8_lossy(chunk)
                ))
            })?;
            aa.push(self.aa_for_codon[idx] as char);
        }
        Ok(aa)
    }
}
