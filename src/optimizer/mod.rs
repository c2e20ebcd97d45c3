//! The population optimizer: generational search over synonymous-codon
//! assignments for a fixed amino-acid sequence.

pub mod crossover;
pub mod mutation;
pub mod runner;

pub use runner::{
    CancelToken, FitnessFn, GaOptions, NopProgress, Optimizer, ProgressCallback, RunOutcome,
};

/// One candidate solution: an owned 2-bit genome (6 bits per codon) plus
/// its cached fitness. Individuals never alias each other's storage.
#[derive(Debug, Clone)]
pub struct Individual {
    pub bits: Vec<u8>,
    pub fitness: f64,
}

impl Individual {
    pub fn unscored(bits: Vec<u8>) -> Self {
        Self {
            bits,
            fitness: f64::MAX,
        }
    }
}
