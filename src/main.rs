use clap::{Parser, Subcommand};
use std::process;
use tracing::error;

mod cmd;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// NCBI translation table to use.
    #[arg(global = true, short = 't', long, default_value_t = 11)]
    trans_table: u32,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Compute k-mer / codon-usage frequency targets from a FASTA file
    Featurize(cmd::featurize::FeaturizeArgs),
    /// Derive an amino-acid sequence from a FASTA file
    Aa(cmd::aa::AaArgs),
    /// Generate a DNA sequence matching a frequency target
    Generate(cmd::generate::GenerateArgs),
}

fn main() {
    // Logs go to stderr; stdout carries only the command's output.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Featurize(args) => cmd::featurize::run(args, cli.trans_table),
        Commands::Aa(args) => cmd::aa::run(args, cli.trans_table),
        Commands::Generate(args) => cmd::generate::run(args, cli.trans_table),
    };

    if let Err(e) = result {
        error!("{}", e);
        process::exit(1);
    }
}
