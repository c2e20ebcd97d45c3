use crate::code::GeneticCode;
use crate::config::GaParams;
use crate::distance::Metric;
use crate::encoding;
use crate::error::{CfResult, CodonForgeError};
use crate::freqs::TargetSpec;
use crate::optimizer::{crossover, mutation, Individual};
use rayon::prelude::*;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// A custom fitness function: maps (target vector, candidate vector) to a
/// non-negative score, lower is better.
pub type FitnessFn = dyn Fn(&[f64], &[f64]) -> f64 + Send + Sync;

pub struct GaOptions {
    pub population_size: usize,
    pub mutation_prob: f64,
    pub crossover_prob: f64,
    pub max_gens_since_improvement: usize,
    pub improvement_rel_threshold: f64,
    pub metric: Metric,
    pub seed: Option<u64>,
    pub verbose: bool,
}

impl Default for GaOptions {
    fn default() -> Self {
        Self::from(&GaParams::default())
    }
}

impl From<&GaParams> for GaOptions {
    fn from(params: &GaParams) -> Self {
        Self {
            population_size: params.population_size,
            mutation_prob: params.mutation_prob,
            crossover_prob: params.crossover_prob,
            max_gens_since_improvement: params.max_gens_since_improvement,
            improvement_rel_threshold: params.improvement_rel_threshold,
            metric: params.metric,
            seed: params.seed,
            verbose: params.verbose,
        }
    }
}

/// Cooperative cancellation, checked once per generation. Cancelling
/// returns the best individual found so far; it is not a failure.
#[derive(Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Per-generation progress hook. Return false to stop the search early
/// (equivalent to cancellation).
pub trait ProgressCallback: Send + Sync {
    fn on_generation(&self, generation: usize, since_improvement: usize, best_fitness: f64)
        -> bool;
}

pub struct NopProgress;

impl ProgressCallback for NopProgress {
    fn on_generation(&self, _: usize, _: usize, _: f64) -> bool {
        true
    }
}

pub struct RunOutcome {
    /// The best DNA sequence found; always translates to the input
    /// amino-acid sequence.
    pub dna: String,
    pub fitness: f64,
    /// Generations evaluated after the initial population.
    pub generations: usize,
    /// True when the run ended via the token or the callback rather than
    /// the stagnation rule.
    pub cancelled: bool,
}

pub struct Optimizer {
    genetic_code: &'static GeneticCode,
    target: TargetSpec,
    target_vec: Vec<f64>,
    aa_seq: String,
    opts: GaOptions,
    fitness_fn: Option<Box<FitnessFn>>,
}

impl Optimizer {
    /// Validates everything that can fail before the generational loop:
    /// run parameters, the target specification's shape against the
    /// sequence length, and the amino-acid alphabet is checked lazily at
    /// seeding.
    pub fn new(
        target: TargetSpec,
        aa_seq: &str,
        genetic_code: &'static GeneticCode,
        opts: GaOptions,
    ) -> CfResult<Self> {
        if opts.population_size == 0 {
            return Err(CodonForgeError::Validation(
                "population size must be positive".into(),
            ));
        }
        if opts.max_gens_since_improvement == 0 {
            return Err(CodonForgeError::Validation(
                "max generations since improvement must be positive".into(),
            ));
        }
        for (name, p) in [
            ("mutation probability", opts.mutation_prob),
            ("crossover probability", opts.crossover_prob),
        ] {
            if !(0.0..=1.0).contains(&p) {
                return Err(CodonForgeError::Validation(format!(
                    "{} must be within [0, 1], got {}",
                    name, p
                )));
            }
        }
        if opts.improvement_rel_threshold < 0.0 {
            return Err(CodonForgeError::Validation(
                "improvement threshold may not be negative".into(),
            ));
        }

        let aa_seq = aa_seq.trim().to_ascii_uppercase();
        if aa_seq.is_empty() {
            return Err(CodonForgeError::Validation(
                "amino-acid sequence may not be empty".into(),
            ));
        }
        if aa_seq.bytes().all(|b| matches!(b, b'A' | b'T' | b'G' | b'C')) {
            warn!(
                "input looks like a DNA sequence; ensure you are passing an amino-acid sequence"
            );
        }

        let dna_len = aa_seq.len() * 3;
        if let Some(&max_k) = target.ks().iter().max() {
            if max_k > dna_len {
                return Err(CodonForgeError::Validation(format!(
                    "target k ({}) exceeds candidate sequence length ({})",
                    max_k, dna_len
                )));
            }
        }

        let target_vec = target.target_vector();
        Ok(Self {
            genetic_code,
            target,
            target_vec,
            aa_seq,
            opts,
            fitness_fn: None,
        })
    }

    /// Substitute a custom fitness function for the built-in metric.
    pub fn with_fitness_fn(mut self, f: Box<FitnessFn>) -> Self {
        self.fitness_fn = Some(f);
        self
    }

    fn evaluate(&self, bits: &[u8]) -> f64 {
        // Both expects guard run invariants; the constructor has already
        // ruled out every input that could trip them.
        let dna = encoding::bits_to_dna(bits).expect("genome decodes to DNA");
        let candidate = self
            .target
            .candidate_vector(&dna, self.genetic_code)
            .expect("candidate vector matches target layout");
        match &self.fitness_fn {
            Some(f) => f(&self.target_vec, &candidate),
            None => self.opts.metric.distance(&self.target_vec, &candidate),
        }
    }

    fn score_population(&self, population: &mut [Individual]) {
        // Evaluation is side-effect-free per individual, so the pass runs
        // in parallel without touching the run's RNG.
        let scores: Vec<f64> = population
            .par_iter()
            .map(|ind| self.evaluate(&ind.bits))
            .collect();
        for (ind, score) in population.iter_mut().zip(scores) {
            ind.fitness = score;
        }
    }

    fn best_of<'p>(population: &'p [Individual]) -> &'p Individual {
        population
            .iter()
            .min_by(|a, b| a.fitness.total_cmp(&b.fitness))
            .expect("population is never empty")
    }

    fn tournament_select<'p>(
        &self,
        population: &'p [Individual],
        rng: &mut fastrand::Rng,
    ) -> &'p Individual {
        let rounds = (self.opts.population_size / 10).max(2);
        let mut best = &population[rng.usize(0..population.len())];
        for _ in 1..rounds {
            let challenger = &population[rng.usize(0..population.len())];
            if challenger.fitness < best.fitness {
                best = challenger;
            }
        }
        best
    }

    fn next_generation(
        &self,
        population: &[Individual],
        mutable: &[usize],
        rng: &mut fastrand::Rng,
    ) -> Vec<Individual> {
        let size = self.opts.population_size;
        let mut next = Vec::with_capacity(size);

        // Elitism: the current best survives unchanged.
        next.push(Self::best_of(population).clone());

        while next.len() < size {
            let p1 = self.tournament_select(population, rng);
            let p2 = self.tournament_select(population, rng);

            let (mut c1, mut c2) = if rng.f64() < self.opts.crossover_prob {
                crossover::crossover_codon_boundary(&p1.bits, &p2.bits, rng)
            } else {
                (p1.bits.clone(), p2.bits.clone())
            };
            if rng.f64() < self.opts.mutation_prob {
                c1 = mutation::mutate(&c1, mutable, self.genetic_code, rng);
            }
            if rng.f64() < self.opts.mutation_prob {
                c2 = mutation::mutate(&c2, mutable, self.genetic_code, rng);
            }

            next.push(Individual::unscored(c1));
            if next.len() < size {
                next.push(Individual::unscored(c2));
            }
        }
        next
    }

    /// Run the generational search to stagnation or cancellation and
    /// return the best sequence found.
    pub fn run<CB: ProgressCallback>(
        &self,
        token: &CancelToken,
        callback: &CB,
    ) -> CfResult<RunOutcome> {
        let mut rng = match self.opts.seed {
            Some(seed) => fastrand::Rng::with_seed(seed),
            None => fastrand::Rng::new(),
        };

        // Seed the population from one back-translation of the protein.
        let seed_dna = self.genetic_code.back_translate(&self.aa_seq)?;
        let seed_bits = encoding::dna_to_bits(&seed_dna)?;
        let mutable = mutation::mutable_positions(&self.aa_seq, self.genetic_code);

        let mut population: Vec<Individual> = (0..self.opts.population_size)
            .map(|_| {
                Individual::unscored(mutation::perturb_seed(
                    &seed_bits,
                    self.genetic_code,
                    &mut rng,
                ))
            })
            .collect();
        self.score_population(&mut population);

        let mut best = Self::best_of(&population).clone();
        let mut since_improvement = 0usize;
        let mut generation = 0usize;
        let mut cancelled = false;

        while since_improvement < self.opts.max_gens_since_improvement {
            if token.is_cancelled() {
                info!("cancellation requested, stopping early");
                cancelled = true;
                break;
            }

            generation += 1;
            population = self.next_generation(&population, &mutable, &mut rng);
            self.score_population(&mut population);

            let gen_best = Self::best_of(&population);
            let qualifying =
                gen_best.fitness < best.fitness * (1.0 - self.opts.improvement_rel_threshold);
            if gen_best.fitness < best.fitness {
                best = gen_best.clone();
            }
            if qualifying {
                since_improvement = 0;
            } else {
                since_improvement += 1;
            }

            if self.opts.verbose {
                info!(
                    generation,
                    since_improvement,
                    max = self.opts.max_gens_since_improvement,
                    fitness = best.fitness,
                    "generation complete"
                );
            } else {
                debug!(generation, fitness = best.fitness, "generation complete");
            }

            if !callback.on_generation(generation, since_improvement, best.fitness) {
                cancelled = true;
                break;
            }
        }

        let dna = encoding::bits_to_dna(&best.bits)?;
        // The operators preserve translation by construction.
        let translated = self.genetic_code.translate(&dna)?;
        assert_eq!(
            translated, self.aa_seq,
            "optimized sequence no longer translates to the input protein"
        );

        Ok(RunOutcome {
            dna,
            fitness: best.fitness,
            generations: generation,
            cancelled,
        })
    }
}
