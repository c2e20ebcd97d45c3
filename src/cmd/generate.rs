use crate::cmd::fasta;
use clap::Args;
use codonforge::code::GeneticCode;
use codonforge::config::GaParams;
use codonforge::error::{CfResult, CodonForgeError};
use codonforge::freqs::TargetSpec;
use codonforge::optimizer::{CancelToken, GaOptions, NopProgress, Optimizer};
use std::fs;
use std::path::PathBuf;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct GenerateArgs {
    /// FASTA file with the amino-acid sequence to encode.
    pub filepath: PathBuf,

    /// JSON file with the target frequencies, as produced by featurize.
    #[arg(long)]
    pub target: PathBuf,

    #[command(flatten)]
    pub ga: GaParams,

    /// Append a stop codon to the generated sequence.
    #[arg(short, long, default_value_t = false)]
    pub stop_codon: bool,
}

pub fn run(args: GenerateArgs, trans_table: u32) -> CfResult<()> {
    let code = GeneticCode::from_id(trans_table)?;
    let records = fasta::read_fasta(&args.filepath)?;
    let (_, aa_seq) = &records[0];
    let aa_seq = aa_seq.trim_end_matches('*');

    let json = fs::read_to_string(&args.target)?;
    let target = TargetSpec::from_json(&json)?;

    let optimizer = Optimizer::new(target, aa_seq, code, GaOptions::from(&args.ga))?;
    let token = CancelToken::new();
    let outcome = optimizer.run(&token, &NopProgress)?;
    info!(
        fitness = outcome.fitness,
        generations = outcome.generations,
        cancelled = outcome.cancelled,
        "search finished"
    );

    let mut dna = outcome.dna;
    if args.stop_codon {
        let stops = code.stop_codons();
        dna.push_str(
            stops
                .first()
                .ok_or_else(|| {
                    CodonForgeError::Validation("genetic code has no stop codons".into())
                })?,
        );
    }
    println!("{}", dna);
    Ok(())
}
