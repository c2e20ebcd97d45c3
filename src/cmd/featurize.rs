use crate::cmd::fasta;
use clap::Args;
use codonforge::code::GeneticCode;
use codonforge::error::CfResult;
use codonforge::freqs::{codon_frequencies, kmer_frequencies, TargetEntry, TargetSpec, UsageMode};
use std::path::PathBuf;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct FeaturizeArgs {
    /// FASTA file with the reference sequences.
    pub filepath: PathBuf,

    /// Values of k to featurize for. May be repeated.
    #[arg(short)]
    pub k: Vec<usize>,

    /// Include a codon-usage featurization.
    #[arg(short = 'c', long, default_value_t = false)]
    pub codon_usage: bool,
}

pub fn run(args: FeaturizeArgs, trans_table: u32) -> CfResult<()> {
    let records = fasta::read_fasta(&args.filepath)?;
    let seqs: Vec<&str> = records.iter().map(|(_, seq)| seq.as_str()).collect();
    info!("featurizing {} sequence(s)", seqs.len());

    let mut entries = Vec::new();
    if !args.k.is_empty() {
        for (k, freqs) in kmer_frequencies(&seqs, &args.k, true)? {
            entries.push(TargetEntry::Kmer { k, freqs });
        }
    }
    if args.codon_usage {
        let code = GeneticCode::from_id(trans_table)?;
        let joined: String = seqs.concat();
        entries.push(TargetEntry::Codons {
            freqs: codon_frequencies(&joined, UsageMode::Absolute, code)?,
        });
    }

    let spec = TargetSpec::new(entries)?;
    println!("{}", serde_json::to_string_pretty(&spec)?);
    Ok(())
}
