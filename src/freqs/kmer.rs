//! Overlapping k-mer counting and frequency vectors.

use crate::error::{CfResult, CodonForgeError};
use std::collections::BTreeMap;

/// Every k-mer over A/C/G/T of length `k`, in lexicographic order.
pub(crate) fn all_kmers(k: usize) -> Vec<String> {
    let mut out = vec![String::new()];
    for _ in 0..k {
        let mut next = Vec::with_capacity(out.len() * 4);
        for prefix in &out {
            for base in ['A', 'C', 'G', 'T'] {
                let mut s = String::with_capacity(k);
                s.push_str(prefix);
                s.push(base);
                next.push(s);
            }
        }
        out = next;
    }
    out
}

/// Count every overlapping window of length `k` across all input
/// sequences jointly.
pub fn kmer_counts(seqs: &[&str], k: usize) -> CfResult<BTreeMap<String, u64>> {
    if k < 1 {
        return Err(CodonForgeError::Validation(
            "k may not be less than 1".into(),
        ));
    }
    if seqs.is_empty() {
        return Err(CodonForgeError::Validation(
            "at least one sequence is required".into(),
        ));
    }
    let mut counts: BTreeMap<String, u64> = BTreeMap::new();
    for seq in seqs {
        if seq.is_empty() {
            return Err(CodonForgeError::Validation(
                "sequence may not be empty".into(),
            ));
        }
        let upper = seq.to_ascii_uppercase();
        if k > upper.len() {
            return Err(CodonForgeError::Validation(format!(
                "k ({}) exceeds sequence length ({})",
                k,
                upper.len()
            )));
        }
        for window in upper.as_bytes().windows(k) {
            *counts
                .entry(String::from_utf8_lossy(window).into_owned())
                .or_default() += 1;
        }
    }
    Ok(counts)
}

/// Per-k relative frequencies of all overlapping k-mers, tallied jointly
/// across the input sequences. With `include_missing`, every possible DNA
/// k-mer is present (0 if unobserved), giving a fixed 4^k key space per k.
pub fn kmer_frequencies(
    seqs: &[&str],
    ks: &[usize],
    include_missing: bool,
) -> CfResult<BTreeMap<usize, BTreeMap<String, f64>>> {
    if ks.is_empty() {
        return Err(CodonForgeError::Validation(
            "at least one value of k is required".into(),
        ));
    }
    let mut sorted_ks = ks.to_vec();
    sorted_ks.sort_unstable();
    sorted_ks.dedup();

    let mut output = BTreeMap::new();
    for &k in &sorted_ks {
        let counts = kmer_counts(seqs, k)?;
        let total: u64 = counts.values().sum();
        let mut freqs: BTreeMap<String, f64> = counts
            .into_iter()
            .map(|(kmer, count)| (kmer, count as f64 / total as f64))
            .collect();
        if include_missing {
            for kmer in all_kmers(k) {
                freqs.entry(kmer).or_insert(0.0);
            }
        }
        output.insert(k, freqs);
    }
    Ok(output)
}

/// Flat frequency vector: values in lexicographic k-mer order within each
/// k, concatenated across ks in ascending order, missing k-mers included
/// as 0. This fixed layout is what distance computations rely on.
pub fn kmer_frequency_vector(seqs: &[&str], ks: &[usize]) -> CfResult<Vec<f64>> {
    let freqs = kmer_frequencies(seqs, ks, true)?;
    let mut vector = Vec::new();
    for (k, map) in &freqs {
        // Observed non-DNA keys would desynchronize the layout, so walk
        // the canonical key space instead of the map.
        for kmer in all_kmers(*k) {
            vector.push(*map.get(&kmer).unwrap_or(&0.0));
        }
    }
    Ok(vector)
}
