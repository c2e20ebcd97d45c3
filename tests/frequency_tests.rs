use codonforge::code::GeneticCode;
use codonforge::freqs::{codon_frequencies, kmer_frequencies, UsageMode};
use rstest::rstest;

#[test]
fn dimer_frequencies_of_a_known_sequence() {
    let freqs = kmer_frequencies(&["GATGATGGC"], &[2], true)
        .unwrap()
        .remove(&2)
        .unwrap();

    assert_eq!(freqs.len(), 16);
    assert_eq!(freqs["GA"], 0.25);
    assert_eq!(freqs["AT"], 0.25);
    assert_eq!(freqs["TG"], 0.25);
    assert_eq!(freqs["GG"], 0.125);
    assert_eq!(freqs["GC"], 0.125);
    assert_eq!(freqs["AA"], 0.0);
}

#[rstest]
#[case(1)]
#[case(2)]
#[case(3)]
fn frequencies_cover_the_full_key_space_and_sum_to_one(#[case] k: usize) {
    let freqs = kmer_frequencies(&["GATGATGGCATTACA"], &[k], true)
        .unwrap()
        .remove(&k)
        .unwrap();

    assert_eq!(freqs.len(), 4usize.pow(k as u32));
    let sum: f64 = freqs.values().sum();
    assert!((sum - 1.0).abs() < 1e-12);
}

#[test]
fn lowercase_input_is_folded_to_uppercase() {
    let lower = kmer_frequencies(&["gatgatggc"], &[2], true).unwrap();
    let upper = kmer_frequencies(&["GATGATGGC"], &[2], true).unwrap();
    assert_eq!(lower, upper);
}

#[test]
fn multiple_ks_are_tallied_independently() {
    let freqs = kmer_frequencies(&["GATGATGGC"], &[2, 1], true).unwrap();
    assert_eq!(freqs.keys().copied().collect::<Vec<_>>(), vec![1, 2]);
    for map in freqs.values() {
        let sum: f64 = map.values().sum();
        assert!((sum - 1.0).abs() < 1e-12);
    }
}

#[test]
fn absolute_codon_usage_counts_over_all_codons() {
    let code = GeneticCode::standard();
    let freqs = codon_frequencies("ATGATGAAA", UsageMode::Absolute, code).unwrap();

    assert_eq!(freqs.len(), 64);
    assert!((freqs["ATG"] - 2.0 / 3.0).abs() < 1e-12);
    assert!((freqs["AAA"] - 1.0 / 3.0).abs() < 1e-12);
    let sum: f64 = freqs.values().sum();
    assert!((sum - 1.0).abs() < 1e-12);
}

#[test]
fn relative_codon_usage_normalizes_within_synonym_groups() {
    let code = GeneticCode::standard();
    // AAA and AAG both encode lysine; observed 2:1.
    let freqs = codon_frequencies("AAAAAAAAG", UsageMode::Relative, code).unwrap();

    assert!((freqs["AAA"] - 2.0 / 3.0).abs() < 1e-12);
    assert!((freqs["AAG"] - 1.0 / 3.0).abs() < 1e-12);
    // Unseen synonym groups fall back to uniform. Methionine has a
    // single codon, tryptophan too.
    assert_eq!(freqs["ATG"], 1.0);
    assert_eq!(freqs["TGG"], 1.0);
    // Isoleucine has three codons, none observed.
    assert!((freqs["ATT"] - 1.0 / 3.0).abs() < 1e-12);
}

#[rstest]
#[case("")]
#[case("ATGA")]
#[case("ATGAXT")]
fn malformed_codon_input_is_rejected(#[case] seq: &str) {
    let code = GeneticCode::standard();
    assert!(codon_frequencies(seq, UsageMode::Absolute, code).is_err());
}
