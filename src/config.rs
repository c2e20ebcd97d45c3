use crate::distance::Metric;
use clap::Args;

/// Run parameters for the generational search. Defaults follow the
/// published defaults of the sequence-generation tool this implements.
#[derive(Args, Debug, Clone)]
pub struct GaParams {
    /// Number of individuals per generation.
    #[arg(long, default_value_t = 100)]
    pub population_size: usize,

    /// Probability that a child is mutated.
    #[arg(long, default_value_t = 0.3)]
    pub mutation_prob: f64,

    /// Probability that a parent pair undergoes crossover.
    #[arg(long, default_value_t = 0.8)]
    pub crossover_prob: f64,

    /// Stop after this many generations without a qualifying improvement.
    #[arg(long, default_value_t = 50)]
    pub max_gens_since_improvement: usize,

    /// Relative improvement required to reset the stagnation counter.
    #[arg(long, default_value_t = 0.0)]
    pub improvement_rel_threshold: f64,

    /// Distance metric: euclidean or jensen-shannon.
    #[arg(long, default_value_t = Metric::JensenShannon)]
    pub metric: Metric,

    /// RNG seed; a fixed seed reproduces the run exactly.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Log per-generation progress.
    #[arg(long, default_value_t = false)]
    pub verbose: bool,
}

impl Default for GaParams {
    fn default() -> Self {
        Self {
            population_size: 100,
            mutation_prob: 0.3,
            crossover_prob: 0.8,
            max_gens_since_improvement: 50,
            improvement_rel_threshold: 0.0,
            metric: Metric::JensenShannon,
            seed: None,
            verbose: false,
        }
    }
}
