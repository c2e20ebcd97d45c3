pub mod aa;
pub mod fasta;
pub mod featurize;
pub mod generate;
