use crate::cmd::fasta;
use clap::{Args, ValueEnum};
use codonforge::code::GeneticCode;
use codonforge::error::{CfResult, CodonForgeError};
use codonforge::freqs::kmer_frequencies;
use codonforge::sample::amino_acid_seq;
use std::collections::BTreeMap;
use std::path::PathBuf;

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AaMode {
    /// Sample a new sequence from the residue frequencies of the input.
    Freq,
    /// Translate the first input sequence exactly.
    Seq,
}

#[derive(Args, Debug, Clone)]
pub struct AaArgs {
    /// FASTA file with DNA sequences.
    pub filepath: PathBuf,

    #[arg(long, value_enum, default_value_t = AaMode::Freq)]
    pub mode: AaMode,

    /// Length of the sequence to generate when --mode freq.
    #[arg(short, long)]
    pub length: Option<usize>,

    /// Append a trailing stop symbol in --mode freq. On by default.
    #[arg(short, long, default_value_t = true)]
    pub stop_codon: bool,

    /// RNG seed for --mode freq.
    #[arg(long)]
    pub seed: Option<u64>,
}

pub fn run(args: AaArgs, trans_table: u32) -> CfResult<()> {
    let code = GeneticCode::from_id(trans_table)?;
    let records = fasta::read_fasta(&args.filepath)?;

    // Exact translation is printed as-is, stops included.
    if args.mode == AaMode::Seq {
        let (_, dna) = &records[0];
        println!("{}", code.translate(dna)?);
        return Ok(());
    }

    let length = args.length.ok_or_else(|| {
        CodonForgeError::Validation("--length is required with --mode freq".into())
    })?;

    // Residue frequencies across all translated input sequences, stops
    // excluded.
    let translated: Vec<String> = records
        .iter()
        .map(|(_, dna)| code.translate(dna).map(|aa| aa.replace('*', "")))
        .collect::<CfResult<_>>()?;
    let refs: Vec<&str> = translated.iter().map(|s| s.as_str()).collect();
    let freqs = kmer_frequencies(&refs, &[1], false)?
        .remove(&1)
        .unwrap_or_default();
    let by_char: BTreeMap<char, f64> = freqs
        .into_iter()
        .filter_map(|(key, value)| key.chars().next().map(|c| (c, value)))
        .collect();

    let mut rng = match args.seed {
        Some(seed) => fastrand::Rng::with_seed(seed),
        None => fastrand::Rng::new(),
    };
    let mut aa_seq = amino_acid_seq(length, &by_char, &mut rng)?;

    if args.stop_codon {
        aa_seq.push('*');
    }
    println!("{}", aa_seq);
    Ok(())
}
