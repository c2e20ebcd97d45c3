//! Codon-aligned single-point crossover.

use fastrand::Rng;

/// Cut both parents at a uniformly chosen codon boundary (a multiple of 6
/// bits, never mid-codon) and swap tails. Children are new owned vectors.
///
/// Genomes with fewer than two codons have no interior boundary; the
/// parents are returned as copies.
pub fn crossover_codon_boundary(p1: &[u8], p2: &[u8], rng: &mut Rng) -> (Vec<u8>, Vec<u8>) {
    assert_eq!(p1.len(), p2.len(), "parents must have the same length");
    let codons = p1.len() / 6;
    if codons < 2 {
        return (p1.to_vec(), p2.to_vec());
    }
    let cut = rng.usize(1..codons) * 6;

    let mut c1 = Vec::with_capacity(p1.len());
    c1.extend_from_slice(&p1[..cut]);
    c1.extend_from_slice(&p2[cut..]);

    let mut c2 = Vec::with_capacity(p2.len());
    c2.extend_from_slice(&p2[..cut]);
    c2.extend_from_slice(&p1[cut..]);

    (c1, c2)
}
