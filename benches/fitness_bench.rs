use codonforge::code::GeneticCode;
use codonforge::distance;
use codonforge::freqs::{codon_frequencies, kmer_frequencies, TargetEntry, TargetSpec, UsageMode};
use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

fn setup_target(seq: &str) -> TargetSpec {
    let code = GeneticCode::standard();
    let mut entries = Vec::new();
    for (k, freqs) in kmer_frequencies(&[seq], &[1, 2, 3], true).unwrap() {
        entries.push(TargetEntry::Kmer { k, freqs });
    }
    entries.push(TargetEntry::Codons {
        freqs: codon_frequencies(seq, UsageMode::Absolute, code).unwrap(),
    });
    TargetSpec::new(entries).unwrap()
}

fn random_dna(codons: usize, seed: u64) -> String {
    let mut rng = fastrand::Rng::with_seed(seed);
    let bases = ['A', 'C', 'G', 'T'];
    (0..codons * 3).map(|_| bases[rng.usize(0..4)]).collect()
}

fn criterion_benchmark(c: &mut Criterion) {
    let code = GeneticCode::standard();
    let reference = random_dna(300, 0xC0D0);
    let candidate = random_dna(300, 0xD1CE);
    let target = setup_target(&reference);
    let target_vec = target.target_vector();
    let candidate_vec = target.candidate_vector(&candidate, code).unwrap();

    c.bench_function("candidate_vector (300 codons, k=1..3 + codons)", |b| {
        b.iter(|| target.candidate_vector(black_box(&candidate), code))
    });

    c.bench_function("jensen_shannon (148-dim)", |b| {
        b.iter(|| distance::jensen_shannon(black_box(&target_vec), black_box(&candidate_vec)))
    });

    c.bench_function("euclidean (148-dim)", |b| {
        b.iter(|| distance::euclidean(black_box(&target_vec), black_box(&candidate_vec)))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
