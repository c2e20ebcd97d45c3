//! Translation-preserving mutation: a codon may only be replaced by a
//! different member of its synonymous set.

use crate::code::{self, GeneticCode};
use fastrand::Rng;

fn base_from_bits(b0: u8, b1: u8) -> u8 {
    match (b0, b1) {
        (0, 0) => b'T',
        (0, 1) => b'C',
        (1, 0) => b'A',
        (1, 1) => b'G',
        _ => unreachable!("genome bits must be 0 or 1"),
    }
}

fn bits_from_base(base: u8) -> [u8; 2] {
    match base {
        b'T' => [0, 0],
        b'C' => [0, 1],
        b'A' => [1, 0],
        b'G' => [1, 1],
        _ => unreachable!("codons are always over A/T/G/C"),
    }
}

/// Read the codon at codon position `pos` (6 bits per codon).
pub(crate) fn codon_at(bits: &[u8], pos: usize) -> [u8; 3] {
    let start = pos * 6;
    [
        base_from_bits(bits[start], bits[start + 1]),
        base_from_bits(bits[start + 2], bits[start + 3]),
        base_from_bits(bits[start + 4], bits[start + 5]),
    ]
}

/// Overwrite the codon at codon position `pos`.
pub(crate) fn write_codon(bits: &mut [u8], pos: usize, codon: [u8; 3]) {
    let start = pos * 6;
    for (i, &base) in codon.iter().enumerate() {
        let pair = bits_from_base(base);
        bits[start + 2 * i] = pair[0];
        bits[start + 2 * i + 1] = pair[1];
    }
}

/// Codon positions whose amino acid admits more than one codon. Fixed for
/// the whole run, since the translated residue at each position never
/// changes.
pub fn mutable_positions(aa_seq: &str, genetic_code: &GeneticCode) -> Vec<usize> {
    aa_seq
        .bytes()
        .enumerate()
        .filter(|(_, aa)| genetic_code.codon_count(*aa) > 1)
        .map(|(pos, _)| pos)
        .collect()
}

/// Replace one randomly chosen mutable codon with a different synonym,
/// returning a new owned genome. With no mutable positions the genome is
/// returned unchanged (as a copy).
pub fn mutate(
    bits: &[u8],
    mutable: &[usize],
    genetic_code: &GeneticCode,
    rng: &mut Rng,
) -> Vec<u8> {
    let mut child = bits.to_vec();
    if mutable.is_empty() {
        return child;
    }
    let pos = mutable[rng.usize(0..mutable.len())];
    let current = codon_at(&child, pos);
    let current_idx = code::codon_index(&current).expect("genome codons are valid");
    let others: Vec<usize> = genetic_code
        .synonym_indices(current_idx)
        .iter()
        .copied()
        .filter(|&idx| idx != current_idx)
        .collect();
    let replacement = others[rng.usize(0..others.len())];
    write_codon(&mut child, pos, code::index_to_codon(replacement));
    child
}

/// Diversify the back-translated seed: every degenerate codon is swapped
/// for a different synonym, so each member starts distinct from the seed
/// while still translating to the same protein.
pub fn perturb_seed(seed_bits: &[u8], genetic_code: &GeneticCode, rng: &mut Rng) -> Vec<u8> {
    let mut bits = seed_bits.to_vec();
    for pos in 0..bits.len() / 6 {
        let current = codon_at(&bits, pos);
        let current_idx = code::codon_index(&current).expect("genome codons are valid");
        let others: Vec<usize> = genetic_code
            .synonym_indices(current_idx)
            .iter()
            .copied()
            .filter(|&idx| idx != current_idx)
            .collect();
        if others.is_empty() {
            continue;
        }
        let replacement = others[rng.usize(0..others.len())];
        write_codon(&mut bits, pos, code::index_to_codon(replacement));
    }
    bits
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::code::GeneticCode;
    use crate::encoding;

    #[test]
    fn codon_accessors_round_trip() {
        let bits = encoding::dna_to_bits("ATGAAACTT").unwrap();
        assert_eq!(codon_at(&bits, 0), *b"ATG");
        assert_eq!(codon_at(&bits, 2), *b"CTT");

        let mut copy = bits.clone();
        write_codon(&mut copy, 1, *b"AAG");
        assert_eq!(encoding::bits_to_dna(&copy).unwrap(), "ATGAAGCTT");
    }

    #[test]
    fn mutable_positions_skip_non_degenerate_residues() {
        let code = GeneticCode::standard();
        // M and W have a single codon each under the standard code.
        assert_eq!(mutable_positions("MKW", code), vec![1]);
        assert!(mutable_positions("MW", code).is_empty());
    }

    #[test]
    fn mutation_always_changes_the_sequence() {
        let code = GeneticCode::standard();
        let bits = encoding::dna_to_bits("ATGAAA").unwrap();
        let mutable = mutable_positions("MK", code);
        let mut rng = fastrand::Rng::with_seed(7);
        for _ in 0..50 {
            let child = mutate(&bits, &mutable, code, &mut rng);
            assert_ne!(child, bits);
            let dna = encoding::bits_to_dna(&child).unwrap();
            assert_eq!(code.translate(&dna).unwrap(), "MK");
            // Only the lysine codon may move.
            assert_eq!(&dna[..3], "ATG");
        }
    }

    #[test]
    fn mutation_without_mutable_positions_is_a_noop() {
        let code = GeneticCode::standard();
        let bits = encoding::dna_to_bits("ATGTGG").unwrap();
        let mut rng = fastrand::Rng::with_seed(7);
        assert_eq!(mutate(&bits, &[], code, &mut rng), bits);
    }

    #[test]
    fn perturbed_seed_translates_to_the_same_protein() {
        let code = GeneticCode::standard();
        let seed = code.back_translate("INQTEL").unwrap();
        let seed_bits = encoding::dna_to_bits(&seed).unwrap();
        let mut rng = fastrand::Rng::with_seed(42);
        for _ in 0..20 {
            let bits = perturb_seed(&seed_bits, code, &mut rng);
            let dna = encoding::bits_to_dna(&bits).unwrap();
            assert_eq!(code.translate(&dna).unwrap(), "INQTEL");
            // Every residue of INQTEL is degenerate, so every codon moved.
            assert_ne!(dna, seed);
        }
    }
}
