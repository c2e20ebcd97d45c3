use codonforge::code::GeneticCode;
use codonforge::encoding::{bits_to_dna, dna_to_bits};
use codonforge::freqs::kmer_frequencies;
use proptest::prelude::*;

proptest! {
    #[test]
    fn encoding_round_trips(dna in "[ACGT]{1,120}") {
        let bits = dna_to_bits(&dna).unwrap();
        prop_assert_eq!(bits.len(), dna.len() * 2);
        prop_assert_eq!(bits_to_dna(&bits).unwrap(), dna);
    }

    #[test]
    fn kmer_frequencies_always_sum_to_one(dna in "[ACGT]{4,60}", k in 1usize..4) {
        let freqs = kmer_frequencies(&[&dna], &[k], true).unwrap().remove(&k).unwrap();
        prop_assert_eq!(freqs.len(), 4usize.pow(k as u32));
        let sum: f64 = freqs.values().sum();
        prop_assert!((sum - 1.0).abs() < 1e-9);
    }

    #[test]
    fn back_translation_inverts_translation(aa in "[ACDEFGHIKLMNPQRSTVWY]{1,40}") {
        let code = GeneticCode::standard();
        let dna = code.back_translate(&aa).unwrap();
        prop_assert_eq!(dna.len(), aa.len() * 3);
        prop_assert_eq!(code.translate(&dna).unwrap(), aa);
    }
}
